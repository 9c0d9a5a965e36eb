use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fade", about = concat!("fade v", env!("CARGO_PKG_VERSION"), " - completed items fade away"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use an alternate fade directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items
    List,
    /// Append a new item
    Add(AddArgs),
    /// Mark an item completed
    Done(PositionArgs),
    /// Mark an item active again
    Undone(PositionArgs),
    /// Delete an item
    Remove(PositionArgs),
    /// Delete all items
    Clear(ClearArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text
    pub text: String,
}

#[derive(Args)]
pub struct PositionArgs {
    /// 1-based position in the list
    pub position: usize,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'f', long)]
    pub force: bool,
}
