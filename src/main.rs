use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use zhkit::{
    CharTable, Chinese, ConvertMode, NumberInput, NumberOptions, PinyinSegmenter, SyllableDictionary,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding charsData.json (or pinyin.json / simplified_traditional.json)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Syllable list, one per line; the builtin inventory is used otherwise
    #[arg(short, long)]
    syllables: Option<PathBuf>,

    /// Stop after this many decompositions per input
    #[arg(short, long)]
    max_results: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Characters to pinyin
    Pinyin {
        text: String,
        /// Also print first letters
        #[arg(long)]
        first: bool,
        #[arg(long, default_value = " ")]
        separator: String,
        /// Emit every non-Chinese character as its own unit
        #[arg(long)]
        split_non_chinese: bool,
    },
    /// Split unspaced pinyin into syllables
    Split {
        pinyin: String,
        /// Print decompositions as JSON arrays
        #[arg(long)]
        array: bool,
    },
    /// Traditional to simplified
    Simplify { text: String },
    /// Simplified to traditional
    Traditional { text: String },
    /// Arabic number to Chinese numerals
    Number {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// 一十二 => 十二
        #[arg(long)]
        ten_min: bool,
    },
    /// Amount to capitalized currency text
    Currency {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(short, long, default_value = "元")]
        unit: String,
    },
    /// Chinese numerals to a number
    Decode { text: String },
    /// Run one operation over every line of a file
    Batch {
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (JSONL); skip to benchmark only
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = BatchOp::Split)]
        op: BatchOp,
        /// Limit number of lines to process
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BatchOp {
    Split,
    Pinyin,
    Simplify,
    Traditional,
    Number,
    Currency,
    Decode,
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    id: usize,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zhkit=info")),
        )
        .init();
}

fn build_chinese(args: &Args) -> anyhow::Result<Chinese> {
    let dictionary = match &args.syllables {
        Some(path) => SyllableDictionary::from_file(path)?,
        None => SyllableDictionary::builtin(),
    };
    let mut segmenter = PinyinSegmenter::new(dictionary);
    if let Some(limit) = args.max_results {
        segmenter = segmenter.with_limit(limit);
    }

    let table = match &args.data {
        Some(dir) => match zhkit::loader::load_dir(dir) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "character data unavailable, lookups will pass through");
                CharTable::new()
            }
        },
        None => CharTable::new(),
    };

    Ok(Chinese::with_segmenter(table, segmenter))
}

/// Text arguments stay text unless they look like plain integers.
fn number_input(value: &str) -> NumberInput {
    match value.parse::<i128>() {
        Ok(n) => NumberInput::Integer(n),
        Err(_) => NumberInput::Text(value.to_string()),
    }
}

fn run_op(chinese: &Chinese, op: BatchOp, line: &str) -> zhkit::Result<serde_json::Value> {
    let value = match op {
        BatchOp::Split => serde_json::to_value(chinese.segment_pinyin_array(line))?,
        BatchOp::Pinyin => serde_json::to_value(chinese.to_pinyin(line, ConvertMode::PINYIN, " ", false)?)?,
        BatchOp::Simplify => chinese.to_simplified(line).into(),
        BatchOp::Traditional => chinese.to_traditional(line).into(),
        BatchOp::Number => chinese
            .encode_numeral(number_input(line), NumberOptions::default())?
            .into(),
        BatchOp::Currency => chinese.encode_currency(number_input(line), "")?.into(),
        BatchOp::Decode => chinese.decode_numeral(line)?.into(),
    };
    Ok(value)
}

fn run_batch(
    chinese: &Chinese,
    input: &Path,
    output: Option<&Path>,
    op: BatchOp,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    tracing::info!(input = %input.display(), ?op, "reading source");
    let reader = BufReader::new(File::open(input)?);
    let mut lines: Vec<String> = reader
        .lines()
        .collect::<Result<Vec<String>, _>>()?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if let Some(limit) = limit {
        lines.truncate(limit);
    }

    let start = Instant::now();
    let results: Vec<String> = lines
        .par_iter()
        .enumerate()
        .map(|(id, line)| {
            let (output, error) = match run_op(chinese, op, line) {
                Ok(value) => (Some(value), None),
                Err(e) => (None, Some(e.to_string())),
            };
            let record = BatchRecord {
                id,
                input: line,
                output,
                error,
            };
            serde_json::to_string(&record)
        })
        .collect::<Result<_, _>>()?;

    if let Some(path) = output {
        let mut writer = BufWriter::with_capacity(262144, File::create(path)?);
        for record in &results {
            writeln!(writer, "{}", record)?;
        }
        writer.flush()?;
        tracing::info!(output = %path.display(), "saved results");
    }

    let elapsed = start.elapsed().as_secs_f32();
    tracing::info!(
        lines = lines.len(),
        seconds = elapsed,
        lines_per_sec = lines.len() as f32 / elapsed.max(f32::EPSILON),
        "batch done"
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let chinese = build_chinese(&args)?;

    match &args.command {
        Command::Pinyin {
            text,
            first,
            separator,
            split_non_chinese,
        } => {
            let mut mode = ConvertMode::PINYIN;
            if *first {
                mode |= ConvertMode::PINYIN_FIRST;
            }
            let result = chinese.to_pinyin(text, mode, separator, *split_non_chinese)?;
            if let Some(line) = result.join(ConvertMode::PINYIN) {
                println!("{}", line);
            }
            if let Some(line) = result.join(ConvertMode::PINYIN_FIRST) {
                println!("{}", line);
            }
        }
        Command::Split { pinyin, array } => {
            if *array {
                for decomposition in chinese.segment_pinyin_array(pinyin) {
                    println!("{}", serde_json::to_string(&decomposition)?);
                }
            } else {
                for decomposition in chinese.segment_pinyin(pinyin) {
                    println!("{}", decomposition);
                }
            }
        }
        Command::Simplify { text } => println!("{}", chinese.to_simplified(text)),
        Command::Traditional { text } => println!("{}", chinese.to_traditional(text)),
        Command::Number { value, ten_min } => {
            let options = NumberOptions { ten_min: *ten_min };
            println!("{}", chinese.encode_numeral(number_input(value), options)?);
        }
        Command::Currency { value, unit } => {
            println!("{}", chinese.encode_currency(number_input(value), unit)?);
        }
        Command::Decode { text } => println!("{}", chinese.decode_numeral(text)?),
        Command::Batch {
            input,
            output,
            op,
            limit,
        } => run_batch(&chinese, input, output.as_deref(), *op, *limit)?,
    }

    Ok(())
}
