//! `acta card`: print the demo credential card.

use clap::Args;

use acta_client::DemoCard;

use crate::render::render_card;

#[derive(Args, Debug)]
pub struct CardArgs {
    /// Print the card as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run_card(args: &CardArgs) -> anyhow::Result<u8> {
    let card = DemoCard::default();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        print!("{}", render_card(&card));
    }
    Ok(0)
}
