// src/data.rs

use crate::model::Question;

/// Loads the question bank from the embedded YAML.
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/questions.yaml");
    serde_yaml::from_str(file_content).expect("could not parse the embedded question bank YAML")
}
