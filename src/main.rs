//! Vanity Address Search CLI
//!
//! Usage:
//!   vanity_engine -p dead                     # Find address starting with "dead"
//!   vanity_engine -p a -s b -m or             # Prefix or suffix
//!   vanity_engine -i cafe,babe --includes-mode any -n 5

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;

use vanity_engine::{Config, EnginePool, Event, Pattern, VanityMatch};

fn main() {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let pattern_config = config.pattern_config();
    let pattern = Pattern::compile(&pattern_config);

    println!("Vanity Address Search");
    println!("=====================");
    println!(
        "Prefix:     {:?}  Suffix: {:?}  ({})",
        pattern.prefix(),
        pattern.suffix(),
        pattern_config.prefix_suffix_mode
    );
    if !pattern.tokens().is_empty() {
        println!(
            "Includes:   {:?} ({})",
            pattern.tokens(),
            pattern_config.includes_mode
        );
    }
    println!("Difficulty: {}", pattern.difficulty_description());
    println!("Engines:    {}", config.worker_count());
    println!("Target:     {} match(es)", config.count);
    println!();

    let pool = EnginePool::new(config.worker_count());
    pool.start(&pattern_config);

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = interrupted.clone();
        ctrlc::set_handler(move || interrupted.store(true, Ordering::Relaxed))
            .expect("Error setting Ctrl-C handler");
    }

    println!("Searching... (Press Ctrl+C to stop)\n");

    let mut found = 0usize;
    let mut attempts = 0u64;
    let mut failed = false;
    let report_interval = Duration::from_secs(config.report_interval);
    let mut last_report = Instant::now();

    loop {
        match pool.recv_timeout(Duration::from_millis(200)) {
            Some(Event::Found(result)) => {
                found += 1;
                print_match(&result, found);
                if found >= config.count {
                    println!("Target reached! Found {} match(es).", found);
                    break;
                }
            }
            Some(Event::Progress { attempts: batch }) => attempts += batch,
            Some(Event::Failed(e)) => {
                eprintln!("Engine failure: {}", e);
                failed = true;
                break;
            }
            None => {}
        }

        if interrupted.load(Ordering::Relaxed) {
            println!("\nStopped by user.");
            break;
        }

        if last_report.elapsed() >= report_interval {
            print_progress(attempts, pool.elapsed());
            last_report = Instant::now();
        }
    }

    pool.stop();
    let elapsed = pool.elapsed();

    // Engines finish their in-flight batch after the stop; collect the
    // trailing progress so the final totals are accurate.
    let events = pool.events().clone();
    pool.join();
    for event in events.try_iter() {
        if let Event::Progress { attempts: batch } = event {
            attempts += batch;
        }
    }

    println!("\n--- Final Statistics ---");
    println!("Keys tested:   {}", format_number(attempts));
    println!("Matches found: {}", found);
    println!("Time elapsed:  {:.2}s", elapsed.as_secs_f64());
    let rate = attempts as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    println!("Average speed: {}/s", format_number(rate as u64));

    if failed {
        process::exit(1);
    }
}

fn print_match(result: &VanityMatch, index: usize) {
    println!("=== Match #{} ===", index);
    println!("Address:     {}", result.address);
    println!("Private Key: {}", result.private_key);
    println!("Engine:      {}", result.engine_id);
    println!();
}

fn print_progress(attempts: u64, elapsed: Duration) {
    let rate = attempts as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    println!(
        "[{:>4}s] Tested {} keys ({}/s)",
        elapsed.as_secs(),
        format_number(attempts),
        format_number(rate as u64)
    );
}

fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
