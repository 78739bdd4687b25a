//! InfoHub dashboard
//!
//! Interactive terminal front end for the gateway.

#![allow(clippy::print_stdout)]

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use presentation_dashboard::{
    ConfiguredGeolocation, Dashboard, Effect, EffectRunner, GatewayClient, GatewayPort,
    GeolocationPort, TimeoutGeolocation,
    cli::{self, Cli, Command, HELP},
    effects::Completion,
    render::render,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::{self, UnboundedSender},
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn dispatch(runner: &EffectRunner, effect: Option<Effect>, tx: &UnboundedSender<Completion>) {
    if let Some(effect) = effect {
        runner.spawn(effect, tx.clone());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they do not interleave with the rendered panels
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(cli::log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let gateway = GatewayClient::new(&cli.api_url, Duration::from_secs(cli.timeout_secs))
        .context("Failed to create gateway client")?;

    match gateway.health().await {
        Ok(health) => info!(url = %cli.api_url, status = %health.status, "Gateway reachable"),
        Err(e) => warn!(url = %cli.api_url, error = %e, "Gateway health check failed"),
    }

    let geolocation = ConfiguredGeolocation::from_coordinates(cli.lat, cli.lon).map(|source| {
        Arc::new(TimeoutGeolocation::new(
            source,
            Duration::from_secs(cli.geo_timeout_secs),
        )) as Arc<dyn GeolocationPort>
    });
    if geolocation.is_none() {
        info!("No --lat/--lon given, location lookups are unsupported");
    }

    let runner = EffectRunner::new(Arc::new(gateway), geolocation);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let (mut dashboard, effect) = Dashboard::new(runner.geolocation_available());
    dispatch(&runner, effect, &tx);

    println!("{HELP}\n");
    println!("{}", render(&dashboard));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {
                        println!("{HELP}");
                        continue;
                    },
                    Ok(command) => match cli::apply(&mut dashboard, command) {
                        Ok(effect) => dispatch(&runner, effect, &tx),
                        Err(message) => {
                            println!("{message}");
                            continue;
                        },
                    },
                    Err(message) => {
                        println!("{message}");
                        continue;
                    },
                }
            },
            Some(completion) = rx.recv() => {
                let effect = dashboard.complete(completion);
                dispatch(&runner, effect, &tx);
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, exiting");
                break;
            },
        }
        println!("{}", render(&dashboard));
    }

    Ok(())
}
