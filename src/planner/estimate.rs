//! Chapter metadata estimation.
//!
//! Scores are derived from superficial title features only:
//! - Difficulty: longer titles and more words score slightly higher
//! - Length: word count drives the score
//!
//! Each base score gets a bounded random tweak (50% none, 25% +1, 25% -1),
//! then is clamped to [1, 5]. The RNG is owned by the caller, so a seeded
//! planner reproduces identical scores.

use rand::Rng;

/// Score bounds for both difficulty and length.
pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 5;

/// Difficulty base: +1 per 15 characters.
pub const DIFFICULTY_CHARS_PER_POINT: usize = 15;
/// Difficulty base: +1 per 6 words.
pub const DIFFICULTY_WORDS_PER_POINT: usize = 6;
/// Length base: +1 per 4 words.
pub const LENGTH_WORDS_PER_POINT: usize = 4;

/// Perturbation draw: 50% no change, 25% +1, 25% -1.
const TWEAKS: [i8; 4] = [0, 0, 1, -1];

/// Derived per-chapter metadata, immutable for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterMeta {
    pub title: String,
    /// 1 (easy) to 5 (hard)
    pub difficulty: u8,
    /// 1 (short) to 5 (long)
    pub length_score: u8,
}

impl ChapterMeta {
    /// Estimate metadata for one chapter title.
    pub fn estimate(title: &str, rng: &mut impl Rng) -> Self {
        Self {
            title: title.to_string(),
            difficulty: perturb(difficulty_base(title), rng),
            length_score: perturb(length_base(title), rng),
        }
    }

    /// Combined scheduling weight; harder/longer chapters are scheduled earliest.
    pub fn weight(&self) -> u8 {
        self.difficulty + self.length_score
    }
}

/// Unperturbed difficulty score for a title.
///
/// `1 + min(4, chars/15 + words/6)`, so empty titles land on 1.
pub fn difficulty_base(title: &str) -> u8 {
    let words = title.split_whitespace().count();
    let chars = title.chars().count();
    let boost = (chars / DIFFICULTY_CHARS_PER_POINT + words / DIFFICULTY_WORDS_PER_POINT).min(4);
    1 + boost as u8
}

/// Unperturbed length score for a title: `1 + min(4, words/4)`.
pub fn length_base(title: &str) -> u8 {
    let words = title.split_whitespace().count();
    let boost = (words / LENGTH_WORDS_PER_POINT).min(4);
    1 + boost as u8
}

fn perturb(base: u8, rng: &mut impl Rng) -> u8 {
    let tweak = TWEAKS[rng.random_range(0..TWEAKS.len())];
    (base as i8 + tweak).clamp(SCORE_MIN as i8, SCORE_MAX as i8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_difficulty_base_empty_title() {
        assert_eq!(difficulty_base(""), 1);
        assert_eq!(difficulty_base("   "), 1);
    }

    #[test]
    fn test_difficulty_base_short_title() {
        // 5 chars, 1 word: 0 boost
        assert_eq!(difficulty_base("Waves"), 1);
    }

    #[test]
    fn test_difficulty_base_long_title() {
        // 34 chars, 4 words: boost = 34/15 + 4/6 = 2
        assert_eq!(difficulty_base("Electromagnetic induction and flux"), 3);
    }

    #[test]
    fn test_difficulty_base_capped_at_five() {
        let title = "a ".repeat(60); // 120 chars, 60 words
        assert_eq!(difficulty_base(&title), 5);
    }

    #[test]
    fn test_length_base_empty_title() {
        assert_eq!(length_base(""), 1);
    }

    #[test]
    fn test_length_base_word_buckets() {
        assert_eq!(length_base("one two three"), 1);
        assert_eq!(length_base("one two three four"), 2);
        assert_eq!(length_base("one two three four five six seven eight"), 3);
    }

    #[test]
    fn test_length_base_capped_at_five() {
        let title = "word ".repeat(40);
        assert_eq!(length_base(&title), 5);
    }

    #[test]
    fn test_estimate_scores_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for title in ["", "x", "Quantum mechanics and the hydrogen atom in detail"] {
            for _ in 0..50 {
                let meta = ChapterMeta::estimate(title, &mut rng);
                assert!((SCORE_MIN..=SCORE_MAX).contains(&meta.difficulty));
                assert!((SCORE_MIN..=SCORE_MAX).contains(&meta.length_score));
            }
        }
    }

    #[test]
    fn test_estimate_deterministic_under_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let meta_a = ChapterMeta::estimate("Organic chemistry reactions", &mut a);
        let meta_b = ChapterMeta::estimate("Organic chemistry reactions", &mut b);

        assert_eq!(meta_a, meta_b);
    }

    #[test]
    fn test_perturb_stays_within_one_of_base() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let score = perturb(3, &mut rng);
            assert!((2..=4).contains(&score));
        }
    }

    #[test]
    fn test_perturb_clamps_at_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            assert!(perturb(1, &mut rng) >= SCORE_MIN);
            assert!(perturb(5, &mut rng) <= SCORE_MAX);
        }
    }

    #[test]
    fn test_weight_sums_scores() {
        let meta = ChapterMeta {
            title: "t".to_string(),
            difficulty: 4,
            length_score: 2,
        };
        assert_eq!(meta.weight(), 6);
    }
}
