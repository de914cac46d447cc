use crate::Error;
use log::debug;
use std::fmt;
use std::str::FromStr;

pub(crate) const ACE: u8 = 14;
pub(crate) const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    fn from_char(c: char) -> Option<Suit> {
        match c {
            '♥' | 'H' | 'h' => Some(Suit::Hearts),
            '♠' | 'S' | 's' => Some(Suit::Spades),
            '♦' | 'D' | 'd' => Some(Suit::Diamonds),
            '♣' | 'C' | 'c' => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// A playing card. The rank runs from 2 to 14, where 11 to 14 are jack, queen, king and ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

fn parse_rank(rank: &str) -> Option<u8> {
    match rank {
        "J" | "j" => Some(11),
        "Q" | "q" => Some(12),
        "K" | "k" => Some(13),
        "A" | "a" => Some(ACE),
        "T" | "t" => Some(10),
        _ => rank.parse().ok().filter(|r| (2..=10).contains(r)),
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parse a card like `"10♥"`, `"A♠"` or `"QD"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCard(String::from(s));
        let text = s.trim();
        let suit_char = text.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];
        let rank = parse_rank(rank_text).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.rank {
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            ACE => write!(f, "A")?,
            rank => write!(f, "{}", rank)?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}

/// Poker hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PokerRank {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
}

/// Five distinct cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// # Errors
    /// [Error::HandSize] unless there are exactly 5 cards, [Error::InvalidCard] for a rank
    /// outside 2 to 14, [Error::DuplicateCard] if a card is repeated.
    pub fn new(cards: Vec<Card>) -> Result<Hand, Error> {
        if cards.len() != HAND_SIZE {
            return Err(Error::HandSize(cards.len()));
        }
        for (i, card) in cards.iter().enumerate() {
            if !(2..=ACE).contains(&card.rank) {
                return Err(Error::InvalidCard(card.to_string()));
            }
            if cards[i + 1..].contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
        }
        Ok(Hand { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Rank the hand.
    ///
    /// An ace counts high or low in a straight, so both `10 J Q K A` and `A 2 3 4 5` qualify.
    pub fn rank(&self) -> PokerRank {
        let mut counts = [0_u8; ACE as usize + 1];
        for card in self.cards.iter() {
            counts[card.rank as usize] += 1;
        }
        // rank multiplicities, largest first
        let mut groups: Vec<u8> = counts.iter().copied().filter(|&n| n > 0).collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let suit = self.cards[0].suit;
        let flush = self.cards.iter().all(|card| card.suit == suit);
        let straight = groups.len() == HAND_SIZE && {
            let run = |ranks: &[u8]| ranks.iter().all(|&r| counts[r as usize] == 1);
            let lowest = (2..=ACE).find(|&r| counts[r as usize] > 0).unwrap_or(0);
            (lowest + 4 <= ACE && run(&[lowest, lowest + 1, lowest + 2, lowest + 3, lowest + 4]))
                || run(&[ACE, 2, 3, 4, 5])
        };

        let rank = match (straight, flush, groups.as_slice()) {
            (true, true, _) => PokerRank::StraightFlush,
            (_, _, [4, ..]) => PokerRank::FourOfKind,
            (_, _, [3, 2]) => PokerRank::FullHouse,
            (_, true, _) => PokerRank::Flush,
            (true, _, _) => PokerRank::Straight,
            (_, _, [3, ..]) => PokerRank::ThreeOfKind,
            (_, _, [2, 2, ..]) => PokerRank::TwoPairs,
            (_, _, [2, ..]) => PokerRank::OnePair,
            _ => PokerRank::HighCard,
        };
        debug!("hand {} ranks {:?}", self, rank);
        rank
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parse cards separated by spaces or commas, like `"4♥ 5♥ 6♥ 7♥ 8♥"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|card| !card.is_empty())
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", cards)
    }
}

/// Rank a poker hand given as five card strings.
/// # Example
/// ```
/// # use ascii_katas::{poker_hand_rank, PokerRank, Error};
/// let rank = poker_hand_rank(&["4♥", "5♥", "6♥", "7♥", "8♥"])?;
/// assert_eq!(rank, PokerRank::StraightFlush);
/// # Ok::<(), Error>(())
/// ```
pub fn poker_hand_rank<S: AsRef<str>>(cards: &[S]) -> Result<PokerRank, Error> {
    let cards = cards
        .iter()
        .map(|card| card.as_ref().parse())
        .collect::<Result<Vec<Card>, _>>()?;
    Ok(Hand::new(cards)?.rank())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(hand: &str) -> PokerRank {
        hand.parse::<Hand>().unwrap().rank()
    }

    #[test]
    fn test_parse_card() {
        let card: Card = "10♦".parse().unwrap();
        assert_eq!(card, Card { rank: 10, suit: Suit::Diamonds });
        assert_eq!("A♠".parse::<Card>().unwrap().rank, ACE);
        assert_eq!("th".parse::<Card>().unwrap().to_string(), "10♥");
        assert_eq!("QC".parse::<Card>().unwrap().to_string(), "Q♣");
        for bad in ["", "♥", "1♥", "11♥", "AX", "Z♠"].iter() {
            assert!(matches!(bad.parse::<Card>(), Err(Error::InvalidCard(_))), "{}", bad);
        }
    }

    #[test]
    fn test_rank_categories() {
        assert_eq!(rank("4♥ 5♥ 6♥ 7♥ 8♥"), PokerRank::StraightFlush);
        assert_eq!(rank("A♠ 4♠ 3♠ 5♠ 2♠"), PokerRank::StraightFlush);
        assert_eq!(rank("10♥ A♥ J♥ Q♥ K♥"), PokerRank::StraightFlush);
        assert_eq!(rank("4♣ 4♦ 4♥ 4♠ 10♥"), PokerRank::FourOfKind);
        assert_eq!(rank("4♣ 4♦ 5♦ 5♠ 5♥"), PokerRank::FullHouse);
        assert_eq!(rank("4♣ 5♣ 6♣ 7♣ Q♣"), PokerRank::Flush);
        assert_eq!(rank("2♠ 3♥ 4♥ 5♥ 6♥"), PokerRank::Straight);
        assert_eq!(rank("2♥ 4♦ 5♥ A♦ 3♠"), PokerRank::Straight);
        assert_eq!(rank("K♥ Q♥ A♥ 10♥ J♠"), PokerRank::Straight);
        assert_eq!(rank("2♥ 2♠ 2♦ 7♥ A♥"), PokerRank::ThreeOfKind);
        assert_eq!(rank("2♥ 4♦ 4♥ A♦ A♠"), PokerRank::TwoPairs);
        assert_eq!(rank("3♥ 4♥ 10♥ 3♦ A♠"), PokerRank::OnePair);
        assert_eq!(rank("A♥ K♥ 3♥ 4♥ 5♠"), PokerRank::HighCard);
    }

    #[test]
    fn test_no_wrap_around_straight() {
        assert_eq!(rank("Q♥ K♦ A♣ 2♠ 3♥"), PokerRank::HighCard);
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(PokerRank::HighCard as u8, 0);
        assert_eq!(PokerRank::StraightFlush as u8, 8);
        assert!(PokerRank::FullHouse > PokerRank::Flush);
    }

    #[test]
    fn test_hand_errors() {
        assert!(matches!("4♥ 5♥ 6♥ 7♥".parse::<Hand>(), Err(Error::HandSize(4))));
        match "4♥ 5♥ 6♥ 7♥ 4♥".parse::<Hand>() {
            Err(Error::DuplicateCard(card)) => assert_eq!(card.to_string(), "4♥"),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(
            poker_hand_rank(&["4♥", "5♥", "6♥", "7♥", "8♥", "9♥"]).unwrap_err().to_string(),
            "A poker hand has 5 cards, found 6"
        );
    }

    #[test]
    fn test_rank_out_of_range() {
        let low: Vec<Card> = ["2♥", "3♥", "4♥", "5♠"]
            .iter()
            .map(|card| card.parse().unwrap())
            .collect();
        for &bad in [0_u8, 1, 15, 255].iter() {
            let mut cards = low.clone();
            cards.insert(0, Card { rank: bad, suit: Suit::Hearts });
            match Hand::new(cards) {
                Err(Error::InvalidCard(text)) => assert_eq!(text, format!("{}♥", bad)),
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn test_hand_display() {
        let hand: Hand = "ah, kd,qs,  jc 10h".parse().unwrap();
        assert_eq!(hand.to_string(), "A♥ K♦ Q♠ J♣ 10♥");
        assert_eq!(hand.rank(), PokerRank::Straight);
    }
}
