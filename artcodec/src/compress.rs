//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::consts::COMPRESS_THRESHOLD;

/// A group of symbols produced by [`RunCompressor`].
///
/// A literal group has `count == 1` and holds every symbol inline. A compressed group holds a
/// single symbol repeated `count` times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run<T> {
    /// Symbols carried by the group
    pub content: Vec<T>,
    /// Repetition count
    pub count: usize,
}

impl<T: Clone> Run<T> {
    /// Returns `true` if the run is emitted in the count-tagged form.
    pub fn is_compressed(&self) -> bool {
        self.count > 1
    }

    /// Reconstruct the symbols the run stands for.
    pub fn expand(&self) -> Vec<T> {
        let mut symbols = Vec::with_capacity(self.content.len() * self.count);
        for _ in 0..self.count {
            symbols.extend_from_slice(&self.content);
        }
        symbols
    }
}

/// Groups runs of identical symbols.
///
/// Runs at least `threshold` long are kept as standalone compressed groups. Shorter runs are
/// merged with their short neighbours into a single literal group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunCompressor {
    threshold: usize,
}

impl RunCompressor {
    /// Create a compressor. Thresholds below 2 are raised to 2.
    pub fn new(threshold: usize) -> RunCompressor {
        RunCompressor {
            threshold: threshold.max(2),
        }
    }

    /// Shortest run emitted in the compressed form.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Partition `symbols` into literal and compressed groups, preserving order.
    pub fn compress<T: PartialEq + Clone>(&self, symbols: &[T]) -> Vec<Run<T>> {
        let mut runs = Vec::new();
        let mut literal: Vec<T> = Vec::new();
        for group in symbols.chunk_by(|a, b| a == b) {
            if group.len() < self.threshold {
                literal.extend_from_slice(group);
                continue;
            }
            if !literal.is_empty() {
                runs.push(Run {
                    content: std::mem::take(&mut literal),
                    count: 1,
                });
            }
            runs.push(Run {
                content: vec![group[0].clone()],
                count: group.len(),
            });
        }
        if !literal.is_empty() {
            runs.push(Run {
                content: literal,
                count: 1,
            });
        }
        runs
    }
}

impl Default for RunCompressor {
    fn default() -> Self {
        Self::new(COMPRESS_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn literal(content: &[u8]) -> Run<u8> {
        Run {
            content: content.to_vec(),
            count: 1,
        }
    }

    fn compressed(symbol: u8, count: usize) -> Run<u8> {
        Run {
            content: vec![symbol],
            count,
        }
    }

    #[test]
    fn test_empty_input() {
        let runs = RunCompressor::default().compress::<u8>(&[]);
        assert!(runs.is_empty());
    }

    #[test]
    fn test_short_runs_merge() {
        let runs = RunCompressor::default().compress(b"AABBBBC");
        assert_eq!(runs, vec![literal(b"AABBBBC")]);
    }

    #[test]
    fn test_threshold_run_compresses() {
        let runs = RunCompressor::default().compress(b"AAAAA");
        assert_eq!(runs, vec![compressed(b'A', 5)]);
        assert!(runs[0].is_compressed());
    }

    #[test]
    fn test_mixed_groups_keep_order() {
        let runs = RunCompressor::default().compress(b"xy------------z  ");
        assert_eq!(
            runs,
            vec![literal(b"xy"), compressed(b'-', 12), literal(b"z  ")]
        );
    }

    #[test]
    fn test_adjacent_compressed_runs() {
        let runs = RunCompressor::default().compress(b"AAAAABBBBBB");
        assert_eq!(runs, vec![compressed(b'A', 5), compressed(b'B', 6)]);
    }

    #[test]
    fn test_custom_threshold() {
        let runs = RunCompressor::new(3).compress(b"abbb");
        assert_eq!(runs, vec![literal(b"a"), compressed(b'b', 3)]);
        assert_eq!(RunCompressor::new(1).threshold(), 2);
    }

    proptest! {
        #[test]
        fn prop_single_symbol_run_is_one_group(symbol in any::<u8>(), len in 1usize..200) {
            let input = vec![symbol; len];
            let runs = RunCompressor::default().compress(&input);
            prop_assert_eq!(runs.len(), 1);
            prop_assert_eq!(runs[0].expand(), input);
            if len >= 5 {
                prop_assert_eq!(runs[0].count, len);
            } else {
                prop_assert_eq!(runs[0].count, 1);
            }
        }

        #[test]
        fn prop_expansion_reconstructs_input(input in proptest::collection::vec(0u8..4, 0..300)) {
            let runs = RunCompressor::default().compress(&input);
            let rebuilt: Vec<u8> = runs.iter().flat_map(|run| run.expand()).collect();
            prop_assert_eq!(rebuilt, input);
            for pair in runs.windows(2) {
                prop_assert!(pair[0].is_compressed() || pair[1].is_compressed());
            }
        }
    }
}
