//! Face-up patterns and tables of them.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use itertools::Itertools;
use log::{debug, info, trace};
use rand::Rng;

use crate::arrangement::Faces;
use crate::card::Card;
use crate::mark::Mark;

/// Number of bits (one per card) in a pattern row.
pub const PATTERN_BITS: usize = Card::COUNT;
/// Number of distinct bit vectors, valid or not.
pub const PATTERN_COUNT: u16 = 1 << PATTERN_BITS;

/// Reasons a pattern table could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The table could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The table is not well-formed CSV.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A non-blank row had fewer than [`PATTERN_BITS`] columns.
    #[error("line {line}: expected {expected} columns, found {columns}", expected = PATTERN_BITS)]
    ShortRow { line: u64, columns: usize },
    /// A cell was neither empty nor a number.
    #[error("line {line}, column {column}: {value:?} is not a number")]
    BadCell { line: u64, column: usize, value: String },
    /// Every row was rejected, or there were no rows.
    #[error("no valid patterns found")]
    NoValidPatterns,
}

/// A choice of face for every card: bit `i` picks which face of card `e(i+1)` is up.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pattern {
    bits: [bool; PATTERN_BITS],
    marks: [Mark; PATTERN_BITS],
}

impl Pattern {
    /// The pattern where card `i` shows face `bits[i]`.
    pub fn from_bits(bits: [bool; PATTERN_BITS]) -> Self {
        Self {
            bits,
            marks: Card::ALL.map(|card| card.face(bits[card.index()])),
        }
    }

    /// The pattern whose bits, most significant first, spell out `index`.
    /// Card `e1` takes the highest bit.
    pub fn from_index(index: u16) -> Option<Self> {
        if index >= PATTERN_COUNT {
            return None;
        }

        let mut bits = [false; PATTERN_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (index >> (PATTERN_BITS - 1 - i)) & 1 == 1;
        }
        Some(Self::from_bits(bits))
    }

    /// All 512 patterns in index order, including invalid ones.
    pub fn all() -> impl Iterator<Item = Pattern> {
        (0..PATTERN_COUNT).filter_map(Self::from_index)
    }

    /// Inverse of [`Self::from_index`].
    pub fn index(&self) -> u16 {
        self.bits.iter().fold(0, |acc, bit| (acc << 1) | u16::from(*bit))
    }

    /// Which face each card shows, in card order.
    #[inline]
    pub fn bits(&self) -> &[bool; PATTERN_BITS] {
        &self.bits
    }

    /// The mark shown by each card, in card order.
    #[inline]
    pub fn marks(&self) -> &[Mark; PATTERN_BITS] {
        &self.marks
    }

    /// The same choice of faces, as [`Faces`].
    pub fn faces(&self) -> Faces {
        Faces::from_pattern_bits(&self.bits)
    }

    /// Number of warm marks among the nine.
    pub fn warm_total(&self) -> usize {
        self.marks.iter().filter(|mark| mark.is_warm()).count()
    }

    /// How many times each mark appears, indexed by mark discriminant.
    pub fn mark_counts(&self) -> [usize; Mark::COUNT] {
        let mut counts = [0; Mark::COUNT];
        self.marks.iter().for_each(|mark| counts[mark.index()] += 1);
        counts
    }

    /// The count of the most frequent mark.
    pub fn max_multiplicity(&self) -> usize {
        self.mark_counts().into_iter().max().unwrap_or(0)
    }

    /// A pattern is playable only if no mark appears three or more times.
    pub fn is_valid(&self) -> bool {
        self.max_multiplicity() < 3
    }
}

/// A non-empty collection of valid [`Pattern`]s to deal games from.
#[derive(Clone, Debug)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Keep the valid members of `patterns`, failing if none remain.
    pub fn new(patterns: impl IntoIterator<Item = Pattern>) -> Result<Self, PatternError> {
        let patterns = patterns.into_iter()
            .filter(|pattern| {
                let valid = pattern.is_valid();
                if !valid {
                    trace!("skipping pattern {:09b}: a mark appears {} times", pattern.index(), pattern.max_multiplicity());
                }
                valid
            })
            .collect_vec();

        if patterns.is_empty() {
            return Err(PatternError::NoValidPatterns);
        }

        Ok(Self { patterns })
    }

    /// Every valid pattern out of the 512 possible bit vectors.
    pub fn enumerate() -> Self {
        Self {
            patterns: Pattern::all().filter(Pattern::is_valid).collect_vec(),
        }
    }

    /// Read a pattern table: one row of 9 bit columns per pattern.
    ///
    /// Blank rows are skipped and so are rows whose marks are invalid.
    /// Empty cells count as 0 and any other non-zero number as 1; columns past the ninth are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PatternError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut patterns = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            patterns.push(Pattern::from_bits(parse_record(&record)?));
        }

        debug!("read {} pattern rows", patterns.len());
        Self::new(patterns)
    }

    /// [`Self::from_reader`] over a string.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        Self::from_reader(text.as_bytes())
    }

    /// [`Self::from_reader`] over the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PatternError> {
        let set = Self::from_reader(File::open(path.as_ref())?)?;
        info!("loaded {} valid patterns from {}", set.len(), path.as_ref().display());
        Ok(set)
    }

    /// Number of valid patterns held.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false; kept alongside [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The patterns in the order they were read or enumerated.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// A uniformly random member.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Pattern {
        &self.patterns[rng.random_range(0..self.patterns.len())]
    }

    /// Number of patterns per warm total.
    pub fn warm_histogram(&self) -> BTreeMap<usize, usize> {
        self.patterns.iter().map(Pattern::warm_total).counts().into_iter().collect()
    }
}

fn parse_record(record: &StringRecord) -> Result<[bool; PATTERN_BITS], PatternError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    if record.len() < PATTERN_BITS {
        return Err(PatternError::ShortRow { line, columns: record.len() });
    }

    let mut bits = [false; PATTERN_BITS];
    for (column, (bit, value)) in bits.iter_mut().zip(record.iter()).enumerate() {
        if value.is_empty() {
            continue;
        }
        match value.parse::<f64>() {
            Ok(number) if !number.is_nan() => *bit = number != 0.0,
            _ => return Err(PatternError::BadCell { line, column: column + 1, value: value.to_string() }),
        }
    }

    Ok(bits)
}

/// Write `patterns` as a headerless table of `0`/`1` columns, readable by [`PatternSet::from_reader`].
pub fn write_csv<W: Write>(patterns: impl IntoIterator<Item = Pattern>, writer: W) -> Result<(), PatternError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    for pattern in patterns {
        writer.write_record(pattern.bits().iter().map(|bit| if *bit { "1" } else { "0" }))?;
    }
    writer.flush()?;

    Ok(())
}
