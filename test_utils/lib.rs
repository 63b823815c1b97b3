use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use wordcount_bench::Line;

/// Utility to generate deterministic synthetic lines for testing and benchmarking.
///
/// Every line holds `words_per_line` numbered words (`word0 word1 ...`), so the
/// expected frequency of each word is exactly the number of lines.
pub fn generate_text_lines(num_lines: usize, words_per_line: usize) -> Vec<Line> {
    (0..num_lines)
        .map(|_| {
            (0..words_per_line)
                .map(|i| format!("word{}", i))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Writes the given lines to a fresh file under the system temp directory and
/// returns its path. The caller is responsible for removing the file.
pub fn write_temp_text_file(file_stem: &str, lines: &[Line]) -> std::io::Result<PathBuf> {
    let file_path =
        std::env::temp_dir().join(format!("{}-{}.txt", file_stem, std::process::id()));

    let mut writer = BufWriter::new(File::create(&file_path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(file_path)
}
