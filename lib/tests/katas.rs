use anyhow::Result;
use ascii_katas::{parse_bank_account, poker_hand_rank, wrap_text, AccountReader, PokerRank};

const ENTRY_490067715: &str = "    _  _  _  _  _  _     _ \n\
                               |_||_|| || ||_   |  |  ||_ \n\
                               \x20 | _||_||_||_|  |  |  | _|\n\
                               \n";

#[test]
fn test_bank_account() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(parse_bank_account(ENTRY_490067715)?, 490067715);
    let account = AccountReader::new().read(ENTRY_490067715)?;
    assert!(!account.checksum_ok());
    Ok(())
}

#[test]
fn test_wrap_poem() -> Result<()> {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
    let lines: Vec<String> = wrap_text(text, 20)?.collect();
    for line in lines.iter() {
        assert!(line.chars().count() <= 20, "{:?}", line);
    }
    assert_eq!(lines.join(" "), text);
    assert_eq!(
        lines,
        vec!["Lorem ipsum dolor", "sit amet,", "consectetur", "adipiscing elit."]
    );
    Ok(())
}

#[test]
fn test_poker_hands() -> Result<()> {
    let hands: &[(&[&str], PokerRank)] = &[
        (&["4♥", "5♥", "6♥", "7♥", "8♥"], PokerRank::StraightFlush),
        (&["A♠", "4♠", "3♠", "5♠", "2♠"], PokerRank::StraightFlush),
        (&["4♣", "4♦", "4♥", "4♠", "10♥"], PokerRank::FourOfKind),
        (&["4♣", "4♦", "5♦", "5♠", "5♥"], PokerRank::FullHouse),
        (&["4♣", "5♣", "6♣", "7♣", "Q♣"], PokerRank::Flush),
        (&["2♠", "3♥", "4♥", "5♥", "6♥"], PokerRank::Straight),
        (&["2♥", "2♠", "2♦", "7♥", "A♥"], PokerRank::ThreeOfKind),
        (&["2♥", "4♦", "4♥", "A♦", "A♠"], PokerRank::TwoPairs),
        (&["3♥", "4♥", "10♥", "3♦", "A♠"], PokerRank::OnePair),
        (&["A♥", "K♥", "3♥", "4♥", "5♠"], PokerRank::HighCard),
    ];
    for (cards, expect) in hands.iter() {
        assert_eq!(poker_hand_rank(*cards)?, *expect, "{:?}", cards);
    }
    Ok(())
}
