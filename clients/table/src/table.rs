use crate::console::Console;
use crate::session::{format_amount, format_signed, Session};
use crate::BoxErr;
use blackjack_round::{play_round, Deck, Error, RoundReport};
use rand::Rng;
use serde::Serialize;
use std::io::{BufRead, Write};

const SEPARATOR: &str = "--------------------------------";

/// One settled round, as printed with `--json`.
#[derive(Serialize)]
struct RoundLog<'a> {
    round: u32,
    bet: u128,
    net: i128,
    wallet: u128,
    report: &'a RoundReport,
}

/// Play rounds until the player quits, runs out of money or closes the input.
pub fn play_session<R, W, G>(
    session: &mut Session,
    console: &mut Console<R, W>,
    rng: &mut G,
    json: bool,
) -> Result<(), BoxErr>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        console.show_wallet(session)?;
        let Some(bet) = console.ask_bet(session)? else {
            log::info!("Input closed, leaving the table");
            return Ok(());
        };
        let wager = session.place_bet(bet)?;
        let can_double = session.can_double(&wager);

        let mut deck = Deck::new(&mut *rng);
        let report = match play_round(&mut deck, can_double, console) {
            Ok(report) => report,
            Err(Error::MovesExhausted) => {
                log::warn!("Input closed mid-round, returning {}", format_amount(wager.bet()));
                session.cancel(wager);
                return Ok(());
            }
            Err(e) => {
                session.cancel(wager);
                return Err(e.into());
            }
        };

        console.show_report(&report)?;
        let bet = wager.bet();
        let net = session.settle(wager, report.outcome);
        console.say(report.outcome.summary())?;
        let settlement = match net {
            n if n > 0 => format!(
                "You won {} ({})",
                format_amount(n.unsigned_abs()),
                report.outcome.odds()
            ),
            n if n < 0 => format!("You lost {}", format_amount(n.unsigned_abs())),
            _ => "Your bet is returned.".to_string(),
        };
        console.say(&settlement)?;

        if json {
            let line = serde_json::to_string(&RoundLog {
                round: session.rounds_played(),
                bet,
                net,
                wallet: session.wallet(),
                report: &report,
            })?;
            console.say(&line)?;
        }
        log::debug!("Net {} on {:?}", format_signed(net), report.outcome);

        if session.is_broke() {
            console.say("You're broke. Sorry.")?;
            return Ok(());
        }
        if !console.ask_play_again()? {
            console.show_wallet(session)?;
            return Ok(());
        }
        console.say(SEPARATOR)?;
    }
}
