//! Answer Editor Model
//!
//! Form state behind the question page's answer list. The first answer's
//! `is_input` flag decides whether the question is open-response; an
//! open-response question does not offer "add another answer".

use serde::Serialize;

use crate::forms::FieldErrors;
use crate::models::{Answer, Ask};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerDraft {
    pub title: String,
    pub is_input: bool,
    pub is_true: bool,
}

impl From<&Answer> for AnswerDraft {
    fn from(answer: &Answer) -> Self {
        Self { title: answer.title.clone(), is_input: answer.is_input, is_true: answer.is_true }
    }
}

/// Body of the full question update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskUpdate {
    pub module_id: String,
    pub title: String,
    pub is_input: bool,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerForm {
    answers: Vec<AnswerDraft>,
}

impl Default for AnswerForm {
    fn default() -> Self {
        Self { answers: vec![AnswerDraft::default()] }
    }
}

impl AnswerForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a loaded question; one blank answer when it has none
    pub fn from_ask(ask: &Ask) -> Self {
        Self::from_answers(&ask.answers)
    }

    pub fn from_answers(answers: &[Answer]) -> Self {
        if answers.is_empty() {
            Self::default()
        } else {
            Self { answers: answers.iter().map(AnswerDraft::from).collect() }
        }
    }

    pub fn answers(&self) -> &[AnswerDraft] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn is_open_response(&self) -> bool {
        self.answers.first().map(|a| a.is_input).unwrap_or(false)
    }

    pub fn can_add_answer(&self) -> bool {
        !self.is_open_response()
    }

    /// Appends a blank answer; ignored for open-response questions
    pub fn add_answer(&mut self) -> bool {
        if !self.can_add_answer() {
            return false;
        }
        self.answers.push(AnswerDraft::default());
        true
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.answers.len() {
            self.answers.remove(index);
        }
    }

    pub fn set_title(&mut self, index: usize, title: impl Into<String>) {
        if let Some(answer) = self.answers.get_mut(index) {
            answer.title = title.into();
        }
    }

    pub fn set_input(&mut self, index: usize, is_input: bool) {
        if let Some(answer) = self.answers.get_mut(index) {
            answer.is_input = is_input;
        }
    }

    pub fn set_true(&mut self, index: usize, is_true: bool) {
        if let Some(answer) = self.answers.get_mut(index) {
            answer.is_true = is_true;
        }
    }

    /// Build the update body for `ask`. Every answer needs a title.
    pub fn to_update(&self, ask: &Ask) -> Result<AskUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.answers.is_empty() {
            errors.add("answers", "Add at least one answer");
        }
        for (i, answer) in self.answers.iter().enumerate() {
            if answer.title.trim().is_empty() {
                errors.add(format!("answers[{}].title", i), "Answer text is required");
            }
        }
        let answers = self
            .answers
            .iter()
            .map(|a| Answer {
                item_id: String::new(),
                title: a.title.trim().to_string(),
                is_input: a.is_input,
                is_true: a.is_true,
            })
            .collect();
        errors.into_result(AskUpdate {
            module_id: ask.module_id.clone(),
            title: ask.title.clone(),
            is_input: self.is_open_response(),
            answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answers: Vec<Answer>) -> Ask {
        Ask { item_id: "a1".into(), title: "Capital?".into(), module_id: "m1".into(), is_input: false, answers }
    }

    fn answer(title: &str, is_input: bool) -> Answer {
        Answer { item_id: format!("id-{}", title), title: title.into(), is_input, is_true: false }
    }

    #[test]
    fn test_new_form_has_one_blank_answer() {
        let form = AnswerForm::from_ask(&ask(vec![]));
        assert_eq!(form.len(), 1);
        assert!(form.can_add_answer());
    }

    #[test]
    fn test_open_response_hides_add_control_regardless_of_count() {
        let form = AnswerForm::from_ask(&ask(vec![
            answer("Paris", true),
            answer("London", false),
            answer("Rome", false),
        ]));
        assert!(!form.can_add_answer());

        let mut form = form;
        assert!(!form.add_answer());
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn test_only_first_answer_drives_open_response() {
        let mut form = AnswerForm::from_ask(&ask(vec![answer("Paris", false), answer("Rome", true)]));
        assert!(form.can_add_answer());
        assert!(form.add_answer());

        form.set_input(0, true);
        assert!(!form.can_add_answer());
    }

    #[test]
    fn test_update_takes_is_input_from_first_answer() {
        let mut form = AnswerForm::new();
        form.set_title(0, " Paris ");
        form.set_input(0, true);
        form.set_true(0, true);

        let update = form.to_update(&ask(vec![])).unwrap();
        assert!(update.is_input);
        assert_eq!(update.module_id, "m1");
        assert_eq!(update.answers[0].title, "Paris");
        assert!(update.answers[0].is_true);
    }

    #[test]
    fn test_blank_answer_titles_rejected() {
        let mut form = AnswerForm::new();
        form.add_answer();
        form.set_title(0, "ok");

        let errors = form.to_update(&ask(vec![])).unwrap_err();
        assert_eq!(errors.get("answers[1].title"), Some("Answer text is required"));
        assert!(errors.get("answers[0].title").is_none());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut form = AnswerForm::new();
        form.remove(5);
        assert_eq!(form.len(), 1);
        form.remove(0);
        assert!(form.is_empty());
        assert!(form.can_add_answer());
        assert!(form.to_update(&ask(vec![])).is_err());
    }
}
