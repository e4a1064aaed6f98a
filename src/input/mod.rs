mod reader;

pub use reader::DictionaryReader;
