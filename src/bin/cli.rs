use clap::{ArgGroup, Parser};
use std::io::{self, Read};
use std::process::ExitCode;
use text_io::try_read;
use tracing::{error, Level};
use wordscrape::plot::{self, PlotOptions};
use wordscrape::{
    load_stopwords, sentences, Analysis, Analyzer, Config, Dictionary, Document, Error,
    Extractor, Fetcher, StopWords,
};

/// Scrape a page (or read text) and rank its most frequent words.
#[derive(Parser, Debug)]
#[command(name = "wordscrape", version, about)]
#[command(group(ArgGroup::new("input").args(["url", "text"])))]
struct Args {
    /// Page to fetch and analyze
    #[arg(long, conflicts_with = "text")]
    url: Option<String>,

    /// Text to analyze; stdin is read when neither --url nor --text is given
    #[arg(long)]
    text: Option<String>,

    /// Number of words to rank (at most the number of distinct non-stop words)
    #[arg(long = "top-k", value_name = "N")]
    top_k: Option<usize>,

    /// Print the outbound links of the page
    #[arg(long)]
    links: bool,

    /// Print the text split into sentences
    #[arg(long)]
    sentences: bool,

    /// Plot the frequency distribution
    #[arg(long)]
    plot: bool,

    /// Plot running totals
    #[arg(long, requires = "plot")]
    cumulative: bool,

    /// Count stop words as well
    #[arg(long)]
    include_stop_words: bool,

    /// Print the first definition of WORD
    #[arg(long, value_name = "WORD")]
    define: Vec<String>,

    /// Keep asking for words to define until an empty line; stdin must stay
    /// free, so the text has to come from --url or --text
    #[arg(long, requires = "input")]
    interactive: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> wordscrape::Result<()> {
    let config = Config::from_env()?;
    let stopwords = if args.include_stop_words {
        StopWords::empty()
    } else {
        load_stopwords(&config)?
    };
    let analyzer = Analyzer::new(stopwords);
    let fetcher = Fetcher::new(&config)?;

    let document = match (&args.url, &args.text) {
        (Some(url), _) => {
            let extractor = Extractor::from_config(&config)?;
            Document::from_url(&fetcher, &extractor, url).await?
        }
        (None, Some(text)) => Document::from_text(text),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Document::from_text(&buffer)
        }
    };

    if args.links {
        for link in &document.links {
            println!("{}", link);
        }
    }
    if args.sentences {
        for sentence in sentences(&document.content) {
            println!("{}", sentence);
        }
    }

    let analysis = analyzer.analyze(&document.content, args.top_k)?;
    if args.json {
        let contents = serde_json::to_string_pretty(&analysis)
            .expect("should have been able to convert analysis to json");
        println!("{}", contents);
    } else {
        print_analysis(&analysis);
    }

    if args.plot {
        let options = PlotOptions {
            samples: Some(analysis.top.len()),
            cumulative: args.cumulative,
            ..PlotOptions::default()
        };
        print!(
            "{}",
            plot::render(&analyzer.content_frequencies(&document.content), &options)
        );
    }

    if !args.define.is_empty() || args.interactive {
        let dictionary = Dictionary::from_config(fetcher.client().clone(), &config)?;
        for word in &args.define {
            let definition = dictionary.define(word).await?;
            println!("{}: {}", word, definition);
        }
        if args.interactive {
            define_loop(&dictionary).await?;
        }
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    println!(
        "found {} words, {} without stop words, {} distinct without stop words",
        analysis.total_words, analysis.content_words, analysis.distinct_content_words
    );
    for (rank, ranked) in analysis.top.iter().enumerate() {
        println!("{:>3}. {} ({})", rank + 1, ranked.word, ranked.count);
    }
}

async fn define_loop(dictionary: &Dictionary) -> wordscrape::Result<()> {
    loop {
        println!("------------------- Enter a word to define -------------------");
        let word: String = match try_read!("{}\n") {
            Ok(word) => word,
            Err(_) => break,
        };
        let word = word.trim();
        if word.is_empty() {
            break;
        }
        match dictionary.define(word).await {
            Ok(definition) => println!("{}: {}", word, definition),
            Err(Error::NotFound(msg)) => println!("{}", msg),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_interactive_needs_url_or_text() {
        assert!(Args::try_parse_from(["cli", "--interactive"]).is_err());
        assert!(Args::try_parse_from(["cli", "--interactive", "--text", "cake"]).is_ok());
        assert!(Args::try_parse_from(["cli", "--interactive", "--url", "http://example.com"]).is_ok());
    }

    #[test]
    fn test_url_and_text_conflict() {
        assert!(Args::try_parse_from(["cli", "--url", "http://example.com", "--text", "cake"]).is_err());
    }

    #[test]
    fn test_top_k_and_stdin_default() {
        let args = Args::try_parse_from(["cli", "--top-k", "3"]).unwrap();
        assert_eq!(args.top_k, Some(3));
        assert!(args.url.is_none() && args.text.is_none());
    }
}
