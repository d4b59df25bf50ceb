use clap::{Parser, Subcommand};
use qimen_base::ALL_PALACES;
use qimen_rs::{
    Category, LeapMethod, Palace, Plate, PlateKind, SearchRequest, chart_with, default_engine,
};

#[derive(Parser)]
#[command(name = "qimen", about = "Qimen Dunjia chart and selection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble and print the chart for a date and double-hour
    Pan {
        /// Civil date (YYYY-MM-DD)
        date: String,
        /// Clock hour 0-23
        #[arg(long, default_value = "12")]
        hour: u32,
        /// Plate style: rotating (default) or flying
        #[arg(long, default_value = "rotating")]
        style: String,
        /// Leap handling: chaibu (default) or zhirun
        #[arg(long, default_value = "chaibu")]
        leap: String,
    },
    /// Search a date range for auspicious double-hours
    Zeri {
        /// Range start (YYYY-MM-DD)
        start: String,
        /// Range end (YYYY-MM-DD)
        end: String,
        /// Category: career, wealth, marriage, health, travel, study, lawsuit, general
        #[arg(long, default_value = "general")]
        category: String,
        /// Maximum results
        #[arg(long, default_value = "10")]
        limit: usize,
        /// Composite score floor
        #[arg(long, default_value = "60")]
        min_score: f64,
        /// Plate style: rotating (default) or flying
        #[arg(long, default_value = "rotating")]
        style: String,
        /// Skip days whose branch clashes the year branch
        #[arg(long)]
        no_year_clash: bool,
        /// Skip days whose branch clashes the month branch
        #[arg(long)]
        no_month_clash: bool,
        /// Skip solar-term transition days
        #[arg(long)]
        no_term_days: bool,
    },
}

fn parse_date(s: &str) -> (i32, u32, u32) {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() == 3 {
        if let (Ok(y), Ok(m), Ok(d)) = (parts[0].parse(), parts[1].parse(), parts[2].parse()) {
            return (y, m, d);
        }
    }
    eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
    std::process::exit(1);
}

fn parse_style(s: &str) -> PlateKind {
    match s {
        "rotating" => PlateKind::Rotating,
        "flying" => PlateKind::Flying,
        _ => {
            eprintln!("Invalid style: {s}");
            eprintln!("Valid: rotating (default), flying");
            std::process::exit(1);
        }
    }
}

fn parse_leap(s: &str) -> LeapMethod {
    match s {
        "chaibu" => LeapMethod::ChaiBu,
        "zhirun" => LeapMethod::ZhiRun,
        _ => {
            eprintln!("Invalid leap method: {s}");
            eprintln!("Valid: chaibu (default), zhirun");
            std::process::exit(1);
        }
    }
}

fn parse_category(s: &str) -> Category {
    match s {
        "career" => Category::Career,
        "wealth" => Category::Wealth,
        "marriage" => Category::Marriage,
        "health" => Category::Health,
        "travel" => Category::Travel,
        "study" => Category::Study,
        "lawsuit" => Category::Lawsuit,
        "general" => Category::General,
        _ => {
            eprintln!("Invalid category: {s}");
            eprintln!("Valid: career, wealth, marriage, health, travel, study, lawsuit, general");
            std::process::exit(1);
        }
    }
}

fn print_palace(plate: &Plate, palace: Palace) {
    let gate = plate.gate_at(palace).map_or("--", |g| g.name());
    let star = plate.star_at(palace).map_or("--", |s| s.name());
    let deity = plate.deity_at(palace).map_or("--", |d| d.name());
    let mut flags = String::new();
    if plate.is_void(palace) {
        flags.push_str(" 空");
    }
    if palace == plate.horse_palace {
        flags.push_str(" 马");
    }
    println!(
        "{} {}  {}/{}  {} {} {}{}",
        palace.name(),
        palace.direction(),
        plate.heaven_stem(palace).name(),
        plate.earth_stem(palace).name(),
        gate,
        star,
        deity,
        flags,
    );
}

fn print_plate(plate: &Plate) {
    let p = plate.pillars;
    println!(
        "{} {} {} {}  {}{}局 ({})",
        p.year, p.month, p.day, p.hour,
        plate.dun.name(),
        plate.ju,
        plate.kind.name(),
    );
    println!(
        "值符宫 {}  落宫 {}",
        plate.leader_palace.name(),
        plate.falling_palace.name()
    );
    for palace in ALL_PALACES {
        print_palace(plate, palace);
    }
    if !plate.formations.is_empty() {
        let names: Vec<&str> = plate.formations.iter().map(|f| f.kind.name()).collect();
        println!("格局: {}", names.join(" "));
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pan {
            date,
            hour,
            style,
            leap,
        } => {
            let (year, month, day) = parse_date(&date);
            let kind = parse_style(&style);
            let leap = parse_leap(&leap);
            match chart_with(year, month, day, hour, kind, leap) {
                Ok(plate) => print_plate(&plate),
                Err(e) => {
                    eprintln!("Failed to assemble chart: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Zeri {
            start,
            end,
            category,
            limit,
            min_score,
            style,
            no_year_clash,
            no_month_clash,
            no_term_days,
        } => {
            let mut request = SearchRequest::new(&start, &end, parse_category(&category));
            request.limit = limit;
            request.min_score = min_score;
            request.kind = parse_style(&style);
            request.exclude_year_clash = no_year_clash;
            request.exclude_month_clash = no_month_clash;
            request.exclude_term_transition = no_term_days;

            let mut engine = default_engine();
            let times = match engine.find_auspicious_times(&request) {
                Ok(times) => times,
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            };
            if times.is_empty() {
                println!("No qualifying double-hours in range.");
                return;
            }
            for t in &times {
                let direction = t.direction.unwrap_or("--");
                println!(
                    "{}-{:02}-{:02} {:02}:00  {}  {:5.1} (格局 {:.0} 用神 {:.0} 神煞 {:.0})  {}",
                    t.year,
                    t.month,
                    t.day,
                    t.hour,
                    t.grade.name(),
                    t.composite,
                    t.pattern_score,
                    t.reference_score,
                    t.spirit_score,
                    direction,
                );
                if !t.highlights.is_empty() {
                    println!("    宜: {}", t.highlights.join(" "));
                }
                if !t.warnings.is_empty() {
                    println!("    忌: {}", t.warnings.join(" "));
                }
            }
        }
    }
}
