use clap::Args;
use eyre::Result;
use qcgen_strategy::catalog::{Alpha, Choice, Execution, Portfolio, Risk, Universe};

#[derive(Args)]
pub struct OptionsCommand {}

impl OptionsCommand {
    pub fn run(&self) -> Result<()> {
        print!(
            "{}",
            [
                category::<Alpha>(),
                category::<Universe>(),
                category::<Portfolio>(),
                category::<Execution>(),
                category::<Risk>(),
            ]
            .join("\n")
        );
        Ok(())
    }
}

/// One category with its keys and labels, keys aligned.
fn category<T: Choice>() -> String {
    let width = T::ALL.iter().map(|c| c.key().len()).max().unwrap_or(0);
    let mut out = format!("{}:\n", T::CATEGORY);
    for choice in T::ALL {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            choice.key(),
            choice.label()
        ));
    }
    out
}
