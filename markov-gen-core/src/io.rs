use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::model::sequence::Sequence;

/// Reads everything from `reader` as one whitespace-tokenized sequence.
pub fn read_sequence<R: Read>(mut reader: R) -> io::Result<Sequence> {
	let mut contents = String::new();
	reader.read_to_string(&mut contents)?;
	Ok(Sequence::from_text(&contents))
}

/// Reads `reader` line by line, one whitespace-tokenized sequence per line.
///
/// Blank lines are skipped.
pub fn read_sequences<R: BufRead>(reader: R) -> io::Result<Vec<Sequence>> {
	let mut sequences = Vec::new();
	for line in reader.lines() {
		let sequence = Sequence::from_text(&line?);
		if !sequence.is_empty() {
			sequences.push(sequence);
		}
	}
	Ok(sequences)
}

/// Reads a text file, either as a single sequence or one sequence per line.
pub fn read_file<P: AsRef<Path>>(filename: P, per_line: bool) -> io::Result<Vec<Sequence>> {
	let file = File::open(filename)?;
	if per_line {
		read_sequences(BufReader::new(file))
	} else {
		Ok(vec![read_sequence(file)?])
	}
}
