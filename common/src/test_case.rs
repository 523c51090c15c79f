use std::path::Path;
use std::path::PathBuf;

/// One conversion test fixture, loaded from a markdown file with a fenced
/// `dump` block (the input) and a fenced `result` block (the expected
/// output, compared with trailing whitespace trimmed).
#[derive(Clone)]
pub struct TestCase {
    pub name: String,
    pub dump: String,
    pub result: String,
    pub path: PathBuf,
}

fn parse_name(content: &str) -> String {
    content
        .lines()
        .next()
        .unwrap()
        .split("# ")
        .collect::<Vec<&str>>()[1]
        .to_string()
}

fn parse_fenced_block(content: &str, language: &str) -> String {
    content
        .split(&format!("```{}\n", language))
        .collect::<Vec<&str>>()[1]
        .split("```")
        .collect::<Vec<&str>>()[0]
        .trim()
        .to_string()
}

impl TestCase {
    pub fn from_string<A, B>(content: A, path: B) -> Self
    where
        A: AsRef<str>,
        B: AsRef<Path>,
    {
        let name = parse_name(content.as_ref());
        let dump = parse_fenced_block(content.as_ref(), "dump");
        let result = parse_fenced_block(content.as_ref(), "result");

        TestCase {
            name,
            dump,
            result,
            path: path.as_ref().into(),
        }
    }
}
