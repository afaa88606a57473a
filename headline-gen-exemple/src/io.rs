use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Reads a headline file and returns its `(timestamp, headline)` pairs.
///
/// - One pair per line, timestamp and headline separated by a tab
/// - Splits on `\n` / `\r\n`, blank lines are skipped
///
/// # Errors
/// Returns `InvalidData` naming the line if a non-blank line has no tab.
pub(crate) fn read_news<P: AsRef<Path>>(filename: P) -> io::Result<Vec<(String, String)>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;

	let mut news = Vec::new();
	for (number, line) in contents.lines().enumerate() {
		if line.trim().is_empty() {
			continue;
		}
		let (timestamp, headline) = line.split_once('\t').ok_or_else(|| {
			io::Error::new(
				io::ErrorKind::InvalidData,
				format!("line {}: expected \"<timestamp>\\t<headline>\"", number + 1),
			)
		})?;
		news.push((timestamp.trim().to_owned(), headline.trim().to_owned()));
	}

	Ok(news)
}

/// Writes one entry per line, creating or truncating the file.
pub(crate) fn write_lines<P, S>(filename: P, lines: &[S]) -> io::Result<()>
where
	P: AsRef<Path>,
	S: AsRef<str>,
{
	let mut writer = BufWriter::new(File::create(filename)?);
	for line in lines {
		writeln!(writer, "{}", line.as_ref())?;
	}
	writer.flush()
}

/// Builds an output path next to an input path.
///
/// Example:
/// `data/news.csv` + `"_fake"` + `"csv"` → `data/news_fake.csv`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	suffix: &str,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(format!("{}{}", file_stem.to_string_lossy(), suffix));
	output.set_extension(output_extension);

	Ok(output)
}

/// Whether `path` points to an existing regular file.
pub(crate) fn is_file<P: AsRef<Path>>(path: P) -> bool {
	fs::metadata(path).map(|metadata| metadata.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_tab_separated_news() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("news.csv");
		fs::write(&path, "10:15 3 octubre 2022\tLula gana\r\n\n08:40 2 octubre 2022\tElecciones en Brasil\n").unwrap();

		let news = read_news(&path).unwrap();
		assert_eq!(
			news,
			vec![
				("10:15 3 octubre 2022".to_owned(), "Lula gana".to_owned()),
				("08:40 2 octubre 2022".to_owned(), "Elecciones en Brasil".to_owned()),
			]
		);
	}

	#[test]
	fn missing_tab_names_the_line() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("news.csv");
		fs::write(&path, "10:15 3 octubre 2022\tLula gana\nsin tabulador\n").unwrap();

		let error = read_news(&path).unwrap_err();
		assert_eq!(error.kind(), io::ErrorKind::InvalidData);
		assert!(error.to_string().contains("line 2"));
	}

	#[test]
	fn writes_one_line_per_entry() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("fake.csv");
		write_lines(&path, &["uno.", "dos."]).unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "uno.\ndos.\n");
		assert!(is_file(&path));
		assert!(!is_file(dir.path()));
	}

	#[test]
	fn output_path_sits_next_to_input() {
		let output = build_output_path("data/news.csv", "_fake", "csv").unwrap();
		assert_eq!(output, PathBuf::from("data/news_fake.csv"));
		let output = build_output_path("news.csv", "_fake", "csv").unwrap();
		assert_eq!(output, PathBuf::from("news_fake.csv"));
	}
}
