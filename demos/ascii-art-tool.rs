use clap::{ArgGroup, Parser};
use rlelist::{art, Translation};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "ascii-art-tool", version, about = "Encode or invert ascii art", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["encoded", "inverted"])))]
struct Cli {
    /// Write the `<char><count>` encoding of the source
    #[arg(short, long)]
    encoded: bool,

    /// Swap blanks and `@` before writing the source back out
    #[arg(short, long)]
    inverted: bool,

    /// Ascii art to read
    source: PathBuf,

    /// File to write
    target: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> rlelist::Result<()> {
    let mut list = art::read_file(&cli.source)?;
    if cli.encoded {
        return art::print_encoded_file(&list, &cli.target);
    }
    let invert = Translation::invert();
    list.map(|c| invert.apply(c));
    art::print_file(&list, &cli.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;

    #[test]
    fn flags_are_exclusive_and_required() {
        assert!(Cli::try_parse_from(["tool", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["tool", "-e", "-i", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["tool", "-e", "a"]).is_err());

        let cli = Cli::try_parse_from(["tool", "-i", "in.txt", "out.txt"]).unwrap();
        assert!(cli.inverted && !cli.encoded);
        assert_eq!(cli.source, PathBuf::from("in.txt"));
        assert_eq!(cli.target, PathBuf::from("out.txt"));
    }

    #[test]
    fn encodes_and_inverts_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("art.txt");
        std::fs::write(&source, b"  @@\n@  @\n").unwrap();

        let encoded = dir.path().join("art.rle");
        let cli = Cli::try_parse_from([
            OsStr::new("tool"),
            OsStr::new("-e"),
            source.as_os_str(),
            encoded.as_os_str(),
        ])
        .unwrap();
        run(&cli).unwrap();
        assert_eq!(std::fs::read(&encoded).unwrap(), b" 2\n@2\n\n1\n@1\n 2\n@1\n\n1\n");

        let inverted = dir.path().join("inverted.txt");
        let cli = Cli::try_parse_from([
            OsStr::new("tool"),
            OsStr::new("-i"),
            source.as_os_str(),
            inverted.as_os_str(),
        ])
        .unwrap();
        run(&cli).unwrap();
        assert_eq!(std::fs::read(&inverted).unwrap(), b"@@  \n @@ \n");
    }
}
