use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use lincode::{
    build_standard_form, reduce_to_rref, AlphabetMap, BitBlock, Bits, Construction, LinearCode,
    NoiseModel, SpanningSet,
};
use log::{error, info, warn};
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Noise {
    /// Flip random bits of every word
    Random,
    /// Flip runs of consecutive bits in some of the words
    Burst,
}

/// Builds a binary linear code from a spanning set and prints every stage of the construction
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// File holding the code length followed by the spanning set. Read from stdin when omitted.
    input: Option<PathBuf>,

    /// Text to send through a noisy channel using the code
    #[clap(short, long)]
    message: Option<PathBuf>,

    /// Channel noise model
    #[clap(long, value_enum, default_value = "random")]
    noise: Noise,

    /// Bit flips per word for random noise
    #[clap(short, long, default_value_t = 3)]
    errors: usize,

    /// Seed for the channel, for reproducible runs
    #[clap(long)]
    seed: Option<u64>,
}

/// One line per word, its value followed by its bits
fn word_lines(words: &[BitBlock], width: usize) -> String {
    words
        .iter()
        .map(|&word| format!("{} {}\n", word, Bits::new(word, width)))
        .collect()
}

fn transmit(cli: &Cli, code: &LinearCode, alphabet: &AlphabetMap, text: &str) -> Result<(), Box<dyn Error>> {
    let message: String = text.chars().filter(|&c| c != '\n').collect();
    println!("the original message:\n{}\n", message);

    let mut words = alphabet.to_words(&message)?;
    let noise = match cli.noise {
        Noise::Random => NoiseModel::Random {
            errors_per_word: cli.errors,
        },
        Noise::Burst => NoiseModel::Burst,
    };
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    noise.apply(&mut words, code.code_length(), &mut rng);
    if let NoiseModel::Random { errors_per_word } = noise {
        println!("number of errors per \"word\": {}\n", errors_per_word);
    }
    println!("the received message:\n{}\n", alphabet.to_symbols(&words));

    let decoded = words
        .iter()
        .map(|&w| code.decode(w))
        .collect::<Result<Vec<_>, _>>()?;
    let decoded = alphabet.to_symbols(&decoded);
    println!("the decoded received message:\n{}\n", decoded);

    let total = message.chars().count();
    if total > 0 {
        let identical = message
            .chars()
            .zip(decoded.chars())
            .filter(|(a, b)| a == b)
            .count();
        println!("percent identity: {}", identical as f64 / total as f64 * 100.0);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let spanning_set = SpanningSet::parse(&text)?;
    let n = spanning_set.code_length;
    let subset = spanning_set.to_matrix()?;
    println!("The subset of the field F\n{}", subset);
    println!("the rref of the matrix above\n{}", reduce_to_rref(&subset)?);

    let code = match LinearCode::from_spanning_set(&subset)? {
        Construction::Code(code) => code,
        Construction::Degenerate(_) => {
            println!("The matrix G is I{}", n);
            return Ok(());
        }
    };

    let standard_form = build_standard_form(code.generator())?;
    println!("the G' form of the rref matrix\n{}", standard_form.systematic);
    println!("permutation:\n{}\n", standard_form.permutation);
    println!("reverse permutation:\n{}\n", standard_form.permutation.inverse());
    println!("the basis of the dual code, C_perp\n{}", code.parity_check());
    println!("generator matrix:\n{}", code.generator());
    println!("parity check matrix:\n{}", code.parity_check());
    println!("code words:\n{}", word_lines(code.code_words(), n));
    info!("built the {}", code);

    let encoded_words = (0..code.code_words().len() as BitBlock)
        .map(|m| code.encode(m))
        .collect::<Result<Vec<_>, _>>()?;
    let Some(alphabet) = alphabet_for(&encoded_words) else {
        if cli.message.is_some() {
            return Err("the code has too many codewords to send a message".into());
        }
        return Ok(());
    };
    println!("alphabet:\n{}\n", alphabet);

    if let Some(path) = &cli.message {
        let message = fs::read_to_string(path)?;
        transmit(cli, &code, &alphabet, &message)?;
    }
    Ok(())
}

/// The alphabet of the code, or `None` after a warning when the codewords cannot be given symbols
fn alphabet_for(encoded_words: &[BitBlock]) -> Option<AlphabetMap> {
    match AlphabetMap::new(encoded_words) {
        Ok(alphabet) => Some(alphabet),
        Err(e) => {
            warn!("no alphabet for this code: {}", e);
            None
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_words_with_values() {
        assert_eq!(word_lines(&[0, 5, 11], 4), "0 0000\n5 0101\n11 1011\n");
        assert_eq!(word_lines(&[], 4), "");
    }

    #[test]
    fn alphabet_for_encoded_words() {
        let alphabet = alphabet_for(&[0b0000, 0b0101, 0b1011, 0b1110]).unwrap();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.symbol(0b1011), Some('C'));
    }

    #[test]
    fn missing_alphabet_is_not_fatal() {
        assert!(alphabet_for(&[0b0000, 0b0101, 0b0101]).is_none());
    }

    #[test]
    fn alphabet_for_sixteen_dimensional_code() {
        let words: Vec<BitBlock> = (0..1 << 16).map(|m| m << 1).collect();
        let alphabet = alphabet_for(&words).unwrap();
        assert_eq!(alphabet.len(), 1 << 16);
    }
}
