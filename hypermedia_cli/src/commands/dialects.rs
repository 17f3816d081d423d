use anyhow::Result;

use crate::output::{print_dialects, OutputFormat};

pub fn run(format: &OutputFormat) -> Result<()> {
    print_dialects(format)
}
