//! Built-in reference table exercised by `coalesce check`.

use coalesce_core::merge_pairs;

pub struct Case {
    pub input: &'static [(i64, i64)],
    pub expected: &'static [(i64, i64)],
}

pub const CASES: &[Case] = &[
    Case { input: &[], expected: &[] },
    Case { input: &[(1, 3)], expected: &[(1, 3)] },
    Case {
        input: &[(1, 3), (2, 6), (8, 10), (15, 18)],
        expected: &[(1, 6), (8, 10), (15, 18)],
    },
    Case { input: &[(1, 4), (4, 5)], expected: &[(1, 5)] },
    Case { input: &[(1, 4), (0, 4)], expected: &[(0, 4)] },
    Case { input: &[(1, 4), (2, 3)], expected: &[(1, 4)] },
    Case {
        input: &[(2, 3), (4, 5), (6, 7), (8, 9), (1, 10)],
        expected: &[(1, 10)],
    },
    Case { input: &[(1, 4), (0, 2), (3, 5)], expected: &[(0, 5)] },
];

/// What a single case produced.
#[derive(Debug)]
pub struct CaseOutcome {
    pub case: &'static Case,
    pub actual: Vec<(i64, i64)>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.actual == self.case.expected
    }
}

pub fn run_cases() -> anyhow::Result<Vec<CaseOutcome>> {
    CASES
        .iter()
        .map(|case| {
            let merged = merge_pairs(case.input.iter().copied())?;
            Ok(CaseOutcome {
                case,
                actual: merged.into_iter().map(<(i64, i64)>::from).collect(),
            })
        })
        .collect()
}

pub fn format_pairs(pairs: &[(i64, i64)]) -> String {
    let items: Vec<String> = pairs
        .iter()
        .map(|&(start, end)| format!("[{start},{end}]"))
        .collect();
    format!("[{}]", items.join(","))
}

impl std::fmt::Debug for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", format_pairs(self.input), format_pairs(self.expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reference_case_passes() {
        let outcomes = run_cases().unwrap();
        assert_eq!(outcomes.len(), CASES.len());
        for outcome in &outcomes {
            assert!(outcome.passed(), "case failed: {:?} got {:?}", outcome.case, outcome.actual);
        }
    }

    #[test]
    fn format_pairs_is_compact() {
        assert_eq!(format_pairs(&[]), "[]");
        assert_eq!(format_pairs(&[(1, 6), (8, 10)]), "[[1,6],[8,10]]");
    }
}
