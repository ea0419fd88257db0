// bases/adjust_batch/src/picker.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Ask the user to choose one of `configs` by number.
///
/// `0` or end of input means exit and returns `None`. Anything other than a
/// bare number in range re-prompts, including surrounding whitespace.
pub fn pick_config(
    configs: &[PathBuf],
    mut input: impl BufRead,
    mut out: impl Write,
) -> io::Result<Option<PathBuf>> {
    writeln!(out, "Select a JSON configuration file to use:")?;
    writeln!(out, "  0: Exit")?;
    for (i, config) in configs.iter().enumerate() {
        let name = config
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        writeln!(out, "  {}: {}", i + 1, name)?;
    }

    loop {
        write!(out, "Enter the number of the file to use: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_choice(&line) {
            Some(0) => return Ok(None),
            Some(idx) if idx <= configs.len() => return Ok(Some(configs[idx - 1].clone())),
            _ => writeln!(out, "Invalid choice. Try again.")?,
        }
    }
}

fn parse_choice(line: &str) -> Option<usize> {
    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    answer.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn configs() -> Vec<PathBuf> {
        vec![
            PathBuf::from("config/metroid.json"),
            PathBuf::from("config/zelda.json"),
        ]
    }

    fn pick(answers: &str) -> (Option<PathBuf>, String) {
        let mut out = Vec::new();
        let picked = pick_config(&configs(), Cursor::new(answers.to_string()), &mut out).unwrap();
        (picked, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_configs_by_name() {
        let (_, out) = pick("0\n");
        assert!(out.contains("  0: Exit"));
        assert!(out.contains("  1: metroid.json"));
        assert!(out.contains("  2: zelda.json"));
    }

    #[rstest]
    #[case("1\n", Some("config/metroid.json"))]
    #[case("2\r\n", Some("config/zelda.json"))]
    #[case("0\n", None)]
    #[case("", None)]
    fn picks_by_number(#[case] typed: &str, #[case] expected: Option<&str>) {
        let (picked, _) = pick(typed);
        assert_eq!(picked, expected.map(PathBuf::from));
    }

    #[test]
    fn reprompts_until_valid() {
        let (picked, out) = pick("abc\n7\n-1\n 2 \n+1\n\n2\n");
        assert_eq!(picked, Some(PathBuf::from("config/zelda.json")));
        assert_eq!(out.matches("Invalid choice. Try again.").count(), 6);
    }
}
