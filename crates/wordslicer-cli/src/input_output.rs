use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// A path argument naming a file; absent or `-` names stdio.
fn file_path(arg: Option<&str>) -> Option<&Path> {
    arg.filter(|p| *p != "-").map(Path::new)
}

/// Corpus or token stream source.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; stdin when absent or "-".
    #[clap(short, long)]
    input: Option<String>,
}

impl InputArgs {
    /// Open a buffered reader over the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(self.input.as_deref()) {
            Some(path) => {
                log::debug!("Reading {}", path.display());
                Box::new(BufReader::new(File::open(path)?))
            }
            None => Box::new(std::io::stdin().lock()),
        })
    }
}

/// Vocabulary or token stream destination.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file; stdout when absent or "-".
    #[clap(short, long)]
    output: Option<String>,
}

impl OutputArgs {
    /// Open a buffered writer over the output; an existing file is truncated.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(self.output.as_deref()) {
            Some(path) => {
                log::debug!("Writing {}", path.display());
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
