use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod analysis;
use analysis::{AnalysisKind, Analyzer};

mod cli_style;
use cli_style::{get_styles, CommandHelp};

mod config;
use config::{AppConfig, CliConfig, FileConfig};

mod dataset;
use dataset::load_dataset;

mod engine;
use engine::NumericField;

mod report;

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to the JSON dataset file.
    #[clap(value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Path to a TOML config file.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Skip per-record schema validation of the dataset.
    #[clap(long)]
    pub skip_checks: bool,
}

#[derive(Parser)]
#[command(styles=get_styles(), name = "", disable_help_subcommand = true)]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Lists every track with its artist.
    TracksWithArtists,

    /// Lists the tracks on the given album.
    TracksInAlbum { album: String },

    /// Lists the distinct album types present in the dataset.
    DistinctAlbumTypes,

    /// Shows the ten most viewed tracks.
    Top10MostViewed,

    /// Shows how many records are loaded.
    TotalTrackCount,

    /// Shows the mean track duration per artist.
    AvgDurationPerArtist,

    /// Shows the five artists with the highest total streams.
    Top5ArtistsByStream,

    /// Lists tracks with danceability above 0.8 and energy above 0.7.
    HighDanceEnergy,

    /// Shows the mean valence per album.
    AvgValencePerAlbum,

    /// Lists albums whose total streams exceed one million.
    #[command(name = "albums-over-1m-streams")]
    AlbumsOver1mStreams,

    /// Shows the artist with the highest total likes.
    ArtistWithMostLikes,

    /// Shows the three most streamed tracks on each platform.
    Top3PerPlatform,

    /// Shows how many tracks have an official video.
    CountOfficialVideo,

    /// Lists tracks with liveness above 0.8 and acousticness below 0.2.
    HighLivenessLowAcoustic,

    /// Lists fully instrumental tracks.
    FullyInstrumental,

    /// Shows the artist with the highest (likes + comments) / views rate.
    TopEngagementArtist,

    /// Shows the top 3 streamed tracks on the given album,
    /// ranked with ties sharing a rank.
    Top3StreamedInAlbum { album: String },

    /// Lists albums with more than five tracks and over 2B total views.
    #[command(name = "albums-over-5-tracks-2b-views")]
    AlbumsOver5Tracks2bViews,

    /// Shows the Pearson correlation between danceability and energy.
    DanceEnergyCorrelation,

    /// Lists artists with more songs than the average artist.
    ArtistsAboveAvgSongCount,

    /// Shows the Pearson correlation between any two numeric columns.
    Correlation { x: String, y: String },

    /// Shows the path of the current dataset.
    Where,

    /// Shows the available commands.
    Help,

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        name: "tracks-with-artists",
        args: "",
        description: "Every track with its artist",
    },
    CommandHelp {
        name: "tracks-in-album",
        args: "<ALBUM>",
        description: "Tracks on the given album",
    },
    CommandHelp {
        name: "distinct-album-types",
        args: "",
        description: "Distinct album types in the dataset",
    },
    CommandHelp {
        name: "total-track-count",
        args: "",
        description: "Number of records loaded",
    },
    CommandHelp {
        name: "count-official-video",
        args: "",
        description: "How many tracks have an official video",
    },
    CommandHelp {
        name: "top10-most-viewed",
        args: "",
        description: "Ten most viewed tracks",
    },
    CommandHelp {
        name: "top5-artists-by-stream",
        args: "",
        description: "Five artists with the most total streams",
    },
    CommandHelp {
        name: "top3-per-platform",
        args: "",
        description: "Three most streamed tracks per platform",
    },
    CommandHelp {
        name: "top3-streamed-in-album",
        args: "<ALBUM>",
        description: "Top 3 streamed tracks on an album",
    },
    CommandHelp {
        name: "artist-with-most-likes",
        args: "",
        description: "Artist with the highest total likes",
    },
    CommandHelp {
        name: "top-engagement-artist",
        args: "",
        description: "Artist with the best (likes + comments) / views",
    },
    CommandHelp {
        name: "artists-above-avg-song-count",
        args: "",
        description: "Artists with more songs than average",
    },
    CommandHelp {
        name: "avg-duration-per-artist",
        args: "",
        description: "Mean track duration per artist",
    },
    CommandHelp {
        name: "avg-valence-per-album",
        args: "",
        description: "Mean valence per album",
    },
    CommandHelp {
        name: "albums-over-1m-streams",
        args: "",
        description: "Albums with over 1M total streams",
    },
    CommandHelp {
        name: "albums-over-5-tracks-2b-views",
        args: "",
        description: "Albums with over 5 tracks and 2B views",
    },
    CommandHelp {
        name: "high-dance-energy",
        args: "",
        description: "Danceable, energetic tracks",
    },
    CommandHelp {
        name: "high-liveness-low-acoustic",
        args: "",
        description: "Live-sounding, non-acoustic tracks",
    },
    CommandHelp {
        name: "fully-instrumental",
        args: "",
        description: "Tracks with instrumentalness of 1",
    },
    CommandHelp {
        name: "dance-energy-correlation",
        args: "",
        description: "Pearson r between danceability and energy",
    },
    CommandHelp {
        name: "correlation",
        args: "<X> <Y>",
        description: "Pearson r between any two numeric columns",
    },
    CommandHelp {
        name: "where",
        args: "",
        description: "Shows the path of the current dataset",
    },
    CommandHelp {
        name: "help",
        args: "",
        description: "Shows this help",
    },
    CommandHelp {
        name: "exit",
        args: "",
        description: "Close this program",
    },
];

fn field_names() -> String {
    NumericField::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn execute_command(
    line: String,
    analyzer: &Analyzer,
    config: &AppConfig,
) -> CommandExecutionResult {
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    let limit = config.report.display_limit;
    match cli {
        Ok(cli) => match cli.command {
            InnerCommand::TracksWithArtists => {
                report::print_analysis(analyzer, AnalysisKind::TracksWithArtists, None, limit)
            }
            InnerCommand::TracksInAlbum { album } => {
                report::print_analysis(analyzer, AnalysisKind::TracksInAlbum, Some(&album), limit)
            }
            InnerCommand::DistinctAlbumTypes => {
                report::print_analysis(analyzer, AnalysisKind::DistinctAlbumTypes, None, limit)
            }
            InnerCommand::Top10MostViewed => {
                report::print_analysis(analyzer, AnalysisKind::Top10MostViewed, None, limit)
            }
            InnerCommand::TotalTrackCount => {
                report::print_analysis(analyzer, AnalysisKind::TotalTrackCount, None, limit)
            }
            InnerCommand::AvgDurationPerArtist => {
                report::print_analysis(analyzer, AnalysisKind::AvgDurationPerArtist, None, limit)
            }
            InnerCommand::Top5ArtistsByStream => {
                report::print_analysis(analyzer, AnalysisKind::Top5ArtistsByStream, None, limit)
            }
            InnerCommand::HighDanceEnergy => {
                report::print_analysis(analyzer, AnalysisKind::HighDanceEnergy, None, limit)
            }
            InnerCommand::AvgValencePerAlbum => {
                report::print_analysis(analyzer, AnalysisKind::AvgValencePerAlbum, None, limit)
            }
            InnerCommand::AlbumsOver1mStreams => {
                report::print_analysis(analyzer, AnalysisKind::AlbumsOver1mStreams, None, limit)
            }
            InnerCommand::ArtistWithMostLikes => {
                report::print_analysis(analyzer, AnalysisKind::ArtistWithMostLikes, None, limit)
            }
            InnerCommand::Top3PerPlatform => {
                report::print_analysis(analyzer, AnalysisKind::Top3PerPlatform, None, limit)
            }
            InnerCommand::CountOfficialVideo => {
                report::print_analysis(analyzer, AnalysisKind::CountOfficialVideo, None, limit)
            }
            InnerCommand::HighLivenessLowAcoustic => {
                report::print_analysis(analyzer, AnalysisKind::HighLivenessLowAcoustic, None, limit)
            }
            InnerCommand::FullyInstrumental => {
                report::print_analysis(analyzer, AnalysisKind::FullyInstrumental, None, limit)
            }
            InnerCommand::TopEngagementArtist => {
                report::print_analysis(analyzer, AnalysisKind::TopEngagementArtist, None, limit)
            }
            InnerCommand::Top3StreamedInAlbum { album } => report::print_analysis(
                analyzer,
                AnalysisKind::Top3StreamedInAlbum,
                Some(&album),
                limit,
            ),
            InnerCommand::AlbumsOver5Tracks2bViews => {
                report::print_analysis(analyzer, AnalysisKind::AlbumsOver5Tracks2bViews, None, limit)
            }
            InnerCommand::DanceEnergyCorrelation => {
                report::print_analysis(analyzer, AnalysisKind::DanceEnergyCorrelation, None, limit)
            }
            InnerCommand::ArtistsAboveAvgSongCount => report::print_analysis(
                analyzer,
                AnalysisKind::ArtistsAboveAvgSongCount,
                None,
                limit,
            ),
            InnerCommand::Correlation { x, y } => {
                let x_field = match NumericField::from_name(&x) {
                    Some(field) => field,
                    None => {
                        return CommandExecutionResult::Error(format!(
                            "Unknown column '{}'. Valid columns are: {}",
                            x,
                            field_names()
                        ));
                    }
                };
                let y_field = match NumericField::from_name(&y) {
                    Some(field) => field,
                    None => {
                        return CommandExecutionResult::Error(format!(
                            "Unknown column '{}'. Valid columns are: {}",
                            y,
                            field_names()
                        ));
                    }
                };
                cli_style::print_section_header(&format!(
                    "{} / {} correlation",
                    x_field, y_field
                ));
                println!();
                match analyzer.correlation(x_field, y_field) {
                    Ok(r) => cli_style::print_key_value("Pearson r", &format!("{:.4}", r)),
                    Err(err) => {
                        cli_style::print_key_value("Pearson r", "undefined");
                        cli_style::print_warning(&err.to_string());
                    }
                }
                cli_style::print_section_footer();
            }
            InnerCommand::Where => {
                cli_style::print_key_value("Dataset", &config.dataset_path.display().to_string());
            }
            InnerCommand::Help => {
                cli_style::print_help(COMMANDS);
            }
            InnerCommand::Exit => return CommandExecutionResult::Exit,
        },

        Err(e) => {
            if let Err(_) = e.print() {
                println!("{}", e);
            }
        }
    }
    CommandExecutionResult::Ok
}

#[derive(rustyline_derive::Hinter)]
struct MyHelper {
    commands_names: Vec<String>,
}

impl MyHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        MyHelper { commands_names }
    }
}

impl Completer for MyHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(" ") {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for MyHelper {}
impl Validator for MyHelper {}
impl Helper for MyHelper {}

const PROMPT: &str = ">> ";

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        dataset_path: cli_args.dataset.clone(),
        skip_checks: cli_args.skip_checks,
        display_limit: 20,
        json: false,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let store = load_dataset(&config.dataset_path, !config.skip_checks)?;
    let analyzer = Analyzer::new(&store);

    cli_style::print_welcome(&config.dataset_path.display().to_string(), store.len());

    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<MyHelper, FileHistory>::with_config(rl_config)?;

    let helper = MyHelper::new();
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(PROMPT);

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line, &analyzer, &config) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        cli_style::print_goodbye();
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        cli_style::print_error(&err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }
    Ok(())
}
