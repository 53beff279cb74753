use clap::{Parser, Subcommand};

/// CalorieCounter — track a daily calorie budget with food and exercise entries.
#[derive(Parser, Debug)]
#[command(name = "calorie_counter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the form interactively and calculate remaining calories.
    Run,

    /// Calculate a summary in one shot from command-line values.
    Calc {
        /// Daily calorie budget.
        #[arg(short, long)]
        budget: String,

        /// Breakfast calorie values (repeatable).
        #[arg(long, value_name = "CALORIES")]
        breakfast: Vec<String>,

        /// Lunch calorie values (repeatable).
        #[arg(long, value_name = "CALORIES")]
        lunch: Vec<String>,

        /// Dinner calorie values (repeatable).
        #[arg(long, value_name = "CALORIES")]
        dinner: Vec<String>,

        /// Snack calorie values (repeatable).
        #[arg(long, value_name = "CALORIES")]
        snacks: Vec<String>,

        /// Exercise calorie values (repeatable).
        #[arg(long, value_name = "CALORIES")]
        exercise: Vec<String>,

        /// Print the summary as JSON instead of the output block.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Run
    }
}
