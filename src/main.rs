use mimalloc::MiMalloc;
use monkey_lang::cli;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    cli::start();
}
