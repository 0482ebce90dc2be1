use anyhow::{anyhow, Context};
use regex::Regex;
use std::path::PathBuf;
use structopt::StructOpt;
use wikimedia_api::{Client, Options, Params};

lazy_static::lazy_static! {
    static ref PARAM_REGEX: Regex = Regex::new(r"^([^=]+)=(.*)$").unwrap();
}

#[derive(StructOpt, Debug)]
#[structopt(name = "wiki-query")]
struct Opt {
    /// Endpoint of the wikimedia api
    #[structopt(short, long, default_value = "https://en.wikipedia.org/w/api.php")]
    api: String,

    /// User-Agent header to send
    #[structopt(short, long)]
    user_agent: Option<String>,

    /// Toml configuration file (with `url` and `user_agent`).
    /// When given, `--api` is ignored
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Query parameter with the form key=value. Can be repeated,
    /// for example: -p action=query -p list=search -p srsearch=rust
    #[structopt(short, long = "param")]
    params: Vec<String>,

    /// Print the response on one line
    #[structopt(long)]
    compact: bool,
}

fn parse_param(param: &str) -> Result<(String, String), anyhow::Error> {
    let captures = PARAM_REGEX
        .captures(param)
        .ok_or_else(|| anyhow!("invalid parameter {}, it should be key=value", param))?;
    Ok((captures[1].to_owned(), captures[2].to_owned()))
}

fn main() -> Result<(), anyhow::Error> {
    wikimedia_api::log::init();
    let opt = Opt::from_args();

    let mut options = match &opt.config {
        Some(path) => Options::from_file(path)
            .with_context(|| format!("impossible to read configuration {}", path.display()))?,
        None => Options::new(opt.api.clone()),
    };
    if let Some(user_agent) = opt.user_agent {
        options.user_agent = Some(user_agent);
    }

    let params = opt
        .params
        .iter()
        .map(|p| parse_param(p.as_str()))
        .collect::<Result<Params, _>>()?;

    let client = Client::new(options).context("invalid configuration")?;
    log::info!("querying {}", client.options().url);
    let response = client.query(params).context("query failed")?;

    if let Some(offset) = response.next_search_offset() {
        log::info!("more results are available, use -p sroffset={}", offset);
    }
    let output = if opt.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{}", output);
    Ok(())
}
