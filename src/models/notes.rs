use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesView {
    pub text: String,
    pub characters: usize,
}
