mod cli;

use cli::commands::Command;
use cli::Flanker;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Flanker::from_args().execute();
}
