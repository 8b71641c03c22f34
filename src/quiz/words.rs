//! Word bank (age 4-7 friendly)
//!
//! Entries are fixed at compile time and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::QuizError;

/// Word bank category, or the `All` wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Animals,
    Colors,
    Food,
    Actions,
}

impl Category {
    /// Wildcard first, then categories in word-bank order
    pub const ALL_CHOICES: [Category; 5] = [
        Category::All,
        Category::Animals,
        Category::Colors,
        Category::Food,
        Category::Actions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Animals => "Animals",
            Category::Colors => "Colors",
            Category::Food => "Food",
            Category::Actions => "Actions",
        }
    }

    /// Whether an entry of category `other` is in scope for this selection
    pub fn admits(&self, other: Category) -> bool {
        *self == Category::All || *self == other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Category::All),
            "animals" | "animal" => Ok(Category::Animals),
            "colors" | "colours" | "color" | "colour" => Ok(Category::Colors),
            "food" => Ok(Category::Food),
            "actions" | "action" => Ok(Category::Actions),
            _ => Err(QuizError::UnknownCategory(s.to_string())),
        }
    }
}

/// One vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: &'static str,
    /// Emoji shown as the picture prompt
    pub display_symbol: &'static str,
    pub hint: &'static str,
    pub example_sentence: &'static str,
    pub category: Category,
}

impl WordEntry {
    /// Word length in letters
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }
}

const fn entry(
    word: &'static str,
    display_symbol: &'static str,
    hint: &'static str,
    example_sentence: &'static str,
    category: Category,
) -> WordEntry {
    WordEntry {
        word,
        display_symbol,
        hint,
        example_sentence,
        category,
    }
}

use Category::{Actions, Animals, Colors, Food};

pub static WORD_BANK: &[WordEntry] = &[
    // Animals
    entry("cat", "🐱", "A small pet that says meow.", "The cat sleeps on the mat.", Animals),
    entry("dog", "🐶", "A friendly pet that wags its tail.", "The dog runs fast.", Animals),
    entry("cow", "🐮", "It says moo and gives milk.", "The cow eats grass.", Animals),
    entry("bee", "🐝", "It buzzes and loves flowers.", "The bee makes honey.", Animals),
    entry("ant", "🐜", "A tiny bug that walks in a line.", "The ant carries food.", Animals),
    entry("lion", "🦁", "King of the jungle.", "The lion has a loud roar.", Animals),
    entry("fish", "🐟", "It swims in water.", "The fish splashes.", Animals),
    entry("frog", "🐸", "It hops and says ribbit.", "The frog jumps high.", Animals),
    entry("duck", "🦆", "A bird that says quack.", "The duck swims in the pond.", Animals),
    entry("bird", "🐦", "It sings in trees.", "The bird can fly.", Animals),
    // Colors
    entry("red", "🔴", "The color of strawberries.", "The ball is red.", Colors),
    entry("blue", "🔵", "The color of the sky.", "The kite is blue.", Colors),
    entry("green", "🟢", "The color of grass.", "The leaf is green.", Colors),
    entry("pink", "🩷", "A soft, bright color.", "The flower is pink.", Colors),
    entry("gold", "🟡", "Shiny and yellow.", "The star looks gold.", Colors),
    // Food
    entry("cake", "🎂", "We eat it at birthdays.", "The cake is sweet.", Food),
    entry("milk", "🥛", "A white drink from cows.", "I drink milk.", Food),
    entry("apple", "🍎", "Red and crunchy.", "An apple a day!", Food),
    entry("bread", "🍞", "We use it for toast.", "I eat bread for breakfast.", Food),
    entry("corn", "🌽", "Yellow and tasty.", "The corn is hot.", Food),
    entry("rice", "🍚", "Small white grains.", "We eat rice with curry.", Food),
    entry("pear", "🍐", "Green fruit, soft and sweet.", "The pear is juicy.", Food),
    // Actions
    entry("run", "🏃‍♀️", "Move fast with your legs.", "I run in the park.", Actions),
    entry("hop", "🐰", "A small jump.", "Bunnies hop.", Actions),
    entry("sing", "🎵", "Use your voice with music.", "We sing a song.", Actions),
    entry("read", "📖", "Look at words in a book.", "We read a story.", Actions),
    entry("draw", "✏️", "Make a picture with a pencil.", "I draw a cat.", Actions),
    entry("sleep", "😴", "Rest with eyes closed.", "Babies sleep a lot.", Actions),
    entry("swim", "🏊", "Move in water.", "We swim at the pool.", Actions),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_words_are_unique() {
        let mut seen = HashSet::new();
        for w in WORD_BANK {
            assert!(seen.insert(w.word), "duplicate word: {}", w.word);
        }
        assert_eq!(WORD_BANK.len(), 29);
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in Category::ALL_CHOICES.iter().skip(1) {
            assert!(
                WORD_BANK.iter().any(|w| w.category == *category),
                "{category} has no words"
            );
        }
        assert!(WORD_BANK.iter().all(|w| w.category != Category::All));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Colors".parse::<Category>().unwrap(), Category::Colors);
        assert_eq!(" colours ".parse::<Category>().unwrap(), Category::Colors);
        assert_eq!("ALL".parse::<Category>().unwrap(), Category::All);
        assert!(matches!(
            "vehicles".parse::<Category>(),
            Err(QuizError::UnknownCategory(s)) if s == "vehicles"
        ));
    }

    #[test]
    fn test_wildcard_admits_everything() {
        assert!(Category::All.admits(Category::Food));
        assert!(Category::Food.admits(Category::Food));
        assert!(!Category::Food.admits(Category::Animals));
    }
}
