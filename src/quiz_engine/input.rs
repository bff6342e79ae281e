//! Maps numbered terminal input onto answer options.

use std::collections::BTreeSet;

use crate::quiz_engine::error::QuizError;

fn option_at<'o>(token: &str, options: &'o [String]) -> Result<&'o String, QuizError> {
    let n: usize = token
        .parse()
        .map_err(|_| QuizError::InvalidSelection(format!("'{token}' is not an option number")))?;
    n.checked_sub(1)
        .and_then(|i| options.get(i))
        .ok_or_else(|| {
            QuizError::InvalidSelection(format!("{n} is out of range 1..={}", options.len()))
        })
}

/// Parse `"1, 3"` (commas and/or spaces) into the selected option texts.
/// Blank input selects nothing.
pub fn parse_selection(input: &str, options: &[String]) -> Result<BTreeSet<String>, QuizError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| option_at(t, options).cloned())
        .collect()
}

/// Parse a single option number.
pub fn parse_choice(input: &str, options: &[String]) -> Result<String, QuizError> {
    let token = input.trim();
    if token.is_empty() {
        return Err(QuizError::InvalidSelection("choose one option".to_string()));
    }
    option_at(token, options).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<String> {
        vec!["alpha".into(), "bravo".into(), "charlie".into()]
    }

    #[test]
    fn selection_accepts_commas_and_spaces() {
        let picked = parse_selection("1, 3", &opts()).unwrap();
        assert_eq!(picked, BTreeSet::from(["alpha".to_string(), "charlie".to_string()]));
        assert_eq!(parse_selection("3 3", &opts()).unwrap().len(), 1);
        assert!(parse_selection("  ", &opts()).unwrap().is_empty());
    }

    #[test]
    fn selection_rejects_bad_numbers() {
        assert!(parse_selection("0", &opts()).is_err());
        assert!(parse_selection("4", &opts()).is_err());
        assert!(parse_selection("two", &opts()).is_err());
    }

    #[test]
    fn choice_requires_exactly_one_option() {
        assert_eq!(parse_choice(" 2 ", &opts()).unwrap(), "bravo");
        assert!(parse_choice("", &opts()).is_err());
        assert!(parse_choice("1,2", &opts()).is_err());
    }
}
