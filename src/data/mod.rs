mod loader;

pub use loader::load_questions_from_json;
