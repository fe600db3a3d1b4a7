use anstyle::{AnsiColor, Color, Style};
use clap::Parser;
use clap::builder::Styles;

pub const DEFAULT_SCAN_ELEMENTS: usize = 8 * 1024 * 1024;
pub const DEFAULT_SCAN_REPEAT: usize = 4;
pub const DEFAULT_LIST_NODES: usize = 1024 * 1024;
pub const DEFAULT_MATRIX_DIM: usize = 256;

/// Steps per node when `random_list` is given no step count.
pub const DEFAULT_STEPS_PER_NODE: u64 = 4;

#[derive(Parser, Debug, Clone)]
#[command(name = "seq_scan")]
#[command(version, about = "Sequential array scan (memory bandwidth)", long_about = None)]
#[command(styles = styles())]
pub struct SeqScanArgs {
    /// Number of array elements
    #[arg(default_value_t = DEFAULT_SCAN_ELEMENTS, value_parser = parse_count, allow_hyphen_values = true)]
    pub elements: usize,

    /// Full passes over the array
    #[arg(default_value_t = DEFAULT_SCAN_REPEAT, value_parser = parse_count, allow_hyphen_values = true)]
    pub repeat: usize,

    /// Log allocation and timing details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "random_list")]
#[command(version, about = "Shuffled linked-list pointer chase (memory latency)", long_about = None)]
#[command(styles = styles())]
pub struct RandomListArgs {
    /// Number of list nodes
    #[arg(default_value_t = DEFAULT_LIST_NODES, value_parser = parse_count, allow_hyphen_values = true)]
    pub nodes: usize,

    /// Traversal steps [default: 4 * nodes]
    #[arg(value_parser = parse_steps, allow_hyphen_values = true)]
    pub steps: Option<u64>,

    /// Log allocation and timing details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl RandomListArgs {
    pub fn steps_or_default(&self) -> u64 {
        self.steps
            .unwrap_or_else(|| (self.nodes as u64).saturating_mul(DEFAULT_STEPS_PER_NODE))
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "matmul")]
#[command(version, about = "Dense square matrix multiply (compute and cache throughput)", long_about = None)]
#[command(styles = styles())]
pub struct MatmulArgs {
    /// Matrix dimension N (matrices are N x N)
    #[arg(default_value_t = DEFAULT_MATRIX_DIM, value_parser = parse_count, allow_hyphen_values = true)]
    pub dim: usize,

    /// Log allocation and timing details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

pub fn styles() -> Styles {
    let header = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
    let cmd = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Green)));
    let value = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
    let error = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Red)));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(cmd)
        .placeholder(value)
        .error(error)
}

/// Integer parsing with C `atoi` semantics.
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// longest run of digits that follows is used. Anything else parses as 0.
/// Out-of-range values saturate.
pub fn parse_atoi(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value = 0i64;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = (b - b'0') as i64;
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Element counts: negative values clamp to 0.
pub fn parse_count(s: &str) -> Result<usize, String> {
    let value = parse_atoi(s).max(0);
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

fn parse_steps(s: &str) -> Result<u64, String> {
    Ok(parse_atoi(s).max(0) as u64)
}
