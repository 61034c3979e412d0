// File: crates/mathlet-core/src/quiz.rs
// Summary: Quiz answer checking (single choice, multiple choice, numeric) with per-option marks.

use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// Nothing usable was submitted; options are left unmarked.
    Unanswered,
}

/// Highlight applied to one option after checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
    Unmarked,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub message: String,
    /// One entry per option, in option order. Empty for numeric questions and
    /// unanswered submissions.
    pub marks: Vec<(String, OptionMark)>,
}

impl Feedback {
    fn unanswered(message: &str) -> Self {
        Self { verdict: Verdict::Unanswered, message: message.to_string(), marks: Vec::new() }
    }

    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// Radio buttons: at most one selection.
    Single,
    /// Checkboxes: any number of selections.
    Multiple,
}

/// Selection state of one question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionState {
    pub kind: QuestionKind,
    selected: BTreeSet<String>,
}

impl QuestionState {
    pub fn new(kind: QuestionKind) -> Self {
        Self { kind, selected: BTreeSet::new() }
    }

    /// Radio semantics: `value` replaces any previous selection.
    pub fn select(&mut self, value: &str) {
        if self.kind == QuestionKind::Single {
            self.selected.clear();
        }
        self.selected.insert(value.to_string());
    }

    /// Checkbox semantics: flip `value`. On a single-choice question this selects it.
    pub fn toggle(&mut self, value: &str) {
        if self.kind == QuestionKind::Single {
            self.select(value);
        } else if !self.selected.remove(value) {
            self.selected.insert(value.to_string());
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    pub fn selected(&self) -> Vec<&str> {
        self.selected.iter().map(String::as_str).collect()
    }

    /// Check against `correct` with the rule matching `kind`.
    pub fn check(&self, options: &[&str], correct: &[&str]) -> Feedback {
        let selected = self.selected();
        match self.kind {
            QuestionKind::Single => {
                check_single(options, selected.first().copied(), correct.first().copied().unwrap_or(""))
            }
            QuestionKind::Multiple => check_multiple(options, &selected, correct),
        }
    }
}

fn mark_options(options: &[&str], selected: &[&str], is_correct: impl Fn(&str) -> bool) -> Vec<(String, OptionMark)> {
    options
        .iter()
        .map(|opt| {
            let mark = if is_correct(opt) {
                OptionMark::Correct
            } else if selected.contains(opt) {
                OptionMark::Incorrect
            } else {
                OptionMark::Unmarked
            };
            (opt.to_string(), mark)
        })
        .collect()
}

pub fn check_single(options: &[&str], selected: Option<&str>, correct: &str) -> Feedback {
    let Some(choice) = selected else {
        return Feedback::unanswered("Please select an answer!");
    };
    let marks = mark_options(options, &[choice], |opt| opt == correct);
    if choice == correct {
        Feedback { verdict: Verdict::Correct, message: "✓ Correct! Great job!".to_string(), marks }
    } else {
        Feedback {
            verdict: Verdict::Incorrect,
            message: "✗ Incorrect. Try again or check the hint!".to_string(),
            marks,
        }
    }
}

/// Correct iff the selection and `correct` hold the same set of options.
pub fn check_multiple(options: &[&str], selected: &[&str], correct: &[&str]) -> Feedback {
    if selected.is_empty() {
        return Feedback::unanswered("Please select at least one answer!");
    }
    let marks = mark_options(options, selected, |opt| correct.contains(&opt));
    let chosen: BTreeSet<&str> = selected.iter().copied().collect();
    let wanted: BTreeSet<&str> = correct.iter().copied().collect();
    let all_right = chosen == wanted;
    if all_right {
        Feedback {
            verdict: Verdict::Correct,
            message: "✓ Correct! You selected all the right answers!".to_string(),
            marks,
        }
    } else {
        Feedback {
            verdict: Verdict::Incorrect,
            message: "✗ Not quite. Review which statements are true.".to_string(),
            marks,
        }
    }
}

/// Correct when `|answer - correct| <= tolerance`. The input is read like a
/// leading-number parse, so trailing units are ignored.
pub fn check_numeric(input: &str, correct: f64, tolerance: f64) -> Feedback {
    let Some(answer) = parse_leading_float(input) else {
        return Feedback::unanswered("Please enter a valid number!");
    };
    if (answer - correct).abs() <= tolerance {
        Feedback {
            verdict: Verdict::Correct,
            message: format!("✓ Correct! The answer is {correct}."),
            marks: Vec::new(),
        }
    } else {
        Feedback {
            verdict: Verdict::Incorrect,
            message: format!("✗ Incorrect. The correct answer is {correct}."),
            marks: Vec::new(),
        }
    }
}

/// Longest prefix of the trimmed input that reads as a decimal number
/// (`[+-]digits[.digits][e[+-]digits]`), e.g. `"3.5 m"` -> 3.5.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}
