use std::fs::File;
use std::io::{self, BufReader, Write};

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use log::{error, info};
use nbtree::{compression::from_compressed_reader_with_opts, DeOpts, Document};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn opts(matches: &ArgMatches) -> Result<DeOpts> {
    let mut opts = DeOpts::new();
    if let Some(depth) = matches.value_of("max-depth") {
        opts = opts.max_depth(depth.parse()?);
    }
    if let Some(bytes) = matches.value_of("max-array-bytes") {
        opts = opts.max_array_bytes(bytes.parse()?);
    }
    Ok(opts)
}

fn print(doc: &Document, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, doc)?;
        writeln!(out)?;
    } else {
        nbtree_tools::dump(&mut out, doc)?;
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let path = matches.value_of_os("file").ok_or("no file given")?;
    let opts = opts(matches)?;

    let file = File::open(path)?;
    let doc = from_compressed_reader_with_opts(BufReader::new(file), opts)?;
    info!(
        "decoded {:?}: root {:?} with {} entries",
        path,
        doc.name,
        doc.root.len()
    );

    print(&doc, matches.is_present("json"))
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("print the contents of an NBT file, compressed or not")
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .help("maximum nesting of lists and compounds"),
        )
        .arg(
            Arg::with_name("max-array-bytes")
                .long("max-array-bytes")
                .takes_value(true)
                .help("maximum size in bytes of any one array"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print the tree as JSON"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        std::process::exit(1);
    }
}
