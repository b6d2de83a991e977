//! Result rendering shared by the report and explorer binaries.
//!
//! Every analysis renders two ways: a styled table or list for humans, and
//! a `serde_json::Value` for machine consumption. The JSON value for the
//! correlation analysis is either a number or the string `"undefined"`.

use crate::analysis::{AnalysisKind, Analyzer};
use crate::cli_style::{self, format_count, TableBuilder};
use serde_json::{json, Value};

/// Prints one analysis as a styled section. `display_limit` caps the rows
/// shown per table, 0 for no limit.
pub fn print_analysis(
    analyzer: &Analyzer,
    kind: AnalysisKind,
    album: Option<&str>,
    display_limit: usize,
) {
    cli_style::print_section_header(kind.title());
    println!();
    match kind {
        AnalysisKind::TracksWithArtists => {
            let rows = analyzer
                .tracks_with_artists()
                .into_iter()
                .map(|(track, artist)| vec![track, artist])
                .collect();
            print_table(
                vec!["Track", "Artist"],
                &[],
                rows,
                display_limit,
                "No records loaded",
            );
        }
        AnalysisKind::TracksInAlbum => match album {
            Some(album) => {
                let tracks = analyzer.tracks_in_album(album);
                print_list(
                    &tracks,
                    display_limit,
                    &format!("No tracks found for album '{}'", album),
                );
            }
            None => cli_style::print_warning("No album name given, pass one with --album"),
        },
        AnalysisKind::DistinctAlbumTypes => {
            let types: Vec<String> = analyzer
                .distinct_album_types()
                .into_iter()
                .map(|t| t.as_str().to_string())
                .collect();
            print_list(&types, display_limit, "No records loaded");
        }
        AnalysisKind::Top10MostViewed => {
            let rows = analyzer
                .top10_most_viewed()
                .into_iter()
                .enumerate()
                .map(|(i, (track, views))| {
                    vec![(i + 1).to_string(), track, format_count(views)]
                })
                .collect();
            print_table(
                vec!["#", "Track", "Views"],
                &[0, 2],
                rows,
                display_limit,
                "No records loaded",
            );
        }
        AnalysisKind::TotalTrackCount => {
            let count = analyzer.total_track_count();
            cli_style::print_key_value("Total tracks", &format_count(count as u64));
        }
        AnalysisKind::AvgDurationPerArtist => {
            let rows = analyzer
                .avg_duration_per_artist()
                .into_iter()
                .map(|(artist, avg)| vec![artist, format!("{:.2}", avg)])
                .collect();
            print_table(
                vec!["Artist", "Avg Duration (min)"],
                &[1],
                rows,
                display_limit,
                "No records loaded",
            );
        }
        AnalysisKind::Top5ArtistsByStream => {
            let rows = analyzer
                .top5_artists_by_stream()
                .into_iter()
                .enumerate()
                .map(|(i, (artist, streams))| {
                    vec![(i + 1).to_string(), artist, format_count(streams)]
                })
                .collect();
            print_table(
                vec!["#", "Artist", "Streams"],
                &[0, 2],
                rows,
                display_limit,
                "No records loaded",
            );
        }
        AnalysisKind::HighDanceEnergy => {
            let rows = analyzer
                .high_dance_energy()
                .into_iter()
                .map(|r| {
                    vec![
                        r.artist.clone(),
                        r.track.clone(),
                        format!("{:.3}", r.danceability),
                        format!("{:.3}", r.energy),
                    ]
                })
                .collect();
            print_table(
                vec!["Artist", "Track", "Danceability", "Energy"],
                &[2, 3],
                rows,
                display_limit,
                "No tracks above both thresholds",
            );
        }
        AnalysisKind::AvgValencePerAlbum => {
            let rows = analyzer
                .avg_valence_per_album()
                .into_iter()
                .map(|(album, avg)| vec![album, format!("{:.3}", avg)])
                .collect();
            print_table(
                vec!["Album", "Avg Valence"],
                &[1],
                rows,
                display_limit,
                "No records with an album",
            );
        }
        AnalysisKind::AlbumsOver1mStreams => {
            let rows = analyzer
                .albums_over_1m_streams()
                .into_iter()
                .map(|(album, streams)| vec![album, format_count(streams)])
                .collect();
            print_table(
                vec!["Album", "Streams"],
                &[1],
                rows,
                display_limit,
                "No albums over 1M total streams",
            );
        }
        AnalysisKind::ArtistWithMostLikes => match analyzer.artist_with_most_likes() {
            Some((artist, likes)) => {
                cli_style::print_key_value_highlight("Artist", &artist);
                cli_style::print_key_value("Total likes", &format_count(likes));
            }
            None => cli_style::print_empty_list("No records loaded"),
        },
        AnalysisKind::Top3PerPlatform => {
            let mut rows = Vec::new();
            for (platform, tracks) in analyzer.top3_per_platform() {
                for (i, (track, streams)) in tracks.into_iter().enumerate() {
                    rows.push(vec![
                        platform.as_str().to_string(),
                        (i + 1).to_string(),
                        track,
                        format_count(streams),
                    ]);
                }
            }
            print_table(
                vec!["Platform", "#", "Track", "Streams"],
                &[1, 3],
                rows,
                display_limit,
                "No records loaded",
            );
        }
        AnalysisKind::CountOfficialVideo => {
            let count = analyzer.count_official_video();
            cli_style::print_key_value("Tracks with an official video", &format_count(count as u64));
        }
        AnalysisKind::HighLivenessLowAcoustic => {
            let rows = analyzer
                .high_liveness_low_acoustic()
                .into_iter()
                .map(|r| {
                    vec![
                        r.artist.clone(),
                        r.track.clone(),
                        format!("{:.3}", r.liveness),
                        format!("{:.3}", r.acousticness),
                    ]
                })
                .collect();
            print_table(
                vec!["Artist", "Track", "Liveness", "Acousticness"],
                &[2, 3],
                rows,
                display_limit,
                "No live-sounding studio tracks",
            );
        }
        AnalysisKind::FullyInstrumental => {
            let rows = analyzer
                .fully_instrumental()
                .into_iter()
                .map(|r| {
                    vec![
                        r.artist.clone(),
                        r.track.clone(),
                        r.album.clone().unwrap_or_else(|| "-".to_string()),
                    ]
                })
                .collect();
            print_table(
                vec!["Artist", "Track", "Album"],
                &[],
                rows,
                display_limit,
                "No fully instrumental tracks",
            );
        }
        AnalysisKind::TopEngagementArtist => match analyzer.top_engagement_artist() {
            Some((artist, rate)) => {
                cli_style::print_key_value_highlight("Artist", &artist);
                cli_style::print_key_value("Engagement rate", &format!("{:.4}", rate));
            }
            None => cli_style::print_empty_list("No artist has a defined engagement rate"),
        },
        AnalysisKind::Top3StreamedInAlbum => match album {
            Some(album) => {
                let rows = analyzer
                    .top3_streamed_in_album(album)
                    .into_iter()
                    .map(|(track, streams)| vec![track, format_count(streams)])
                    .collect();
                print_table(
                    vec!["Track", "Streams"],
                    &[1],
                    rows,
                    display_limit,
                    &format!("No tracks found for album '{}'", album),
                );
            }
            None => cli_style::print_warning("No album name given, pass one with --album"),
        },
        AnalysisKind::AlbumsOver5Tracks2bViews => {
            let rows = analyzer
                .albums_over_5_tracks_2b_views()
                .into_iter()
                .map(|totals| {
                    vec![
                        totals.album,
                        format_count(totals.track_count),
                        format_count(totals.total_views),
                    ]
                })
                .collect();
            print_table(
                vec!["Album", "Tracks", "Views"],
                &[1, 2],
                rows,
                display_limit,
                "No albums with over 5 tracks and 2B views",
            );
        }
        AnalysisKind::DanceEnergyCorrelation => match analyzer.dance_energy_correlation() {
            Ok(r) => cli_style::print_key_value("Pearson r", &format!("{:.4}", r)),
            Err(err) => {
                cli_style::print_key_value("Pearson r", "undefined");
                cli_style::print_warning(&err.to_string());
            }
        },
        AnalysisKind::ArtistsAboveAvgSongCount => {
            let rows = analyzer
                .artists_above_avg_song_count()
                .into_iter()
                .map(|(artist, count)| vec![artist, count.to_string()])
                .collect();
            print_table(
                vec!["Artist", "Songs"],
                &[1],
                rows,
                display_limit,
                "No artist is above the average",
            );
        }
    }
    cli_style::print_section_footer();
}

/// Returns one analysis result as a JSON value.
pub fn analysis_json(analyzer: &Analyzer, kind: AnalysisKind, album: Option<&str>) -> Value {
    match kind {
        AnalysisKind::TracksWithArtists => Value::Array(
            analyzer
                .tracks_with_artists()
                .into_iter()
                .map(|(track, artist)| json!({"track": track, "artist": artist}))
                .collect(),
        ),
        AnalysisKind::TracksInAlbum => match album {
            Some(album) => json!({"album": album, "tracks": analyzer.tracks_in_album(album)}),
            None => json!({"error": "album name required"}),
        },
        AnalysisKind::DistinctAlbumTypes => json!(analyzer.distinct_album_types()),
        AnalysisKind::Top10MostViewed => Value::Array(
            analyzer
                .top10_most_viewed()
                .into_iter()
                .map(|(track, views)| json!({"track": track, "views": views}))
                .collect(),
        ),
        AnalysisKind::TotalTrackCount => json!(analyzer.total_track_count()),
        AnalysisKind::AvgDurationPerArtist => Value::Array(
            analyzer
                .avg_duration_per_artist()
                .into_iter()
                .map(|(artist, avg)| json!({"artist": artist, "avg_duration_min": avg}))
                .collect(),
        ),
        AnalysisKind::Top5ArtistsByStream => Value::Array(
            analyzer
                .top5_artists_by_stream()
                .into_iter()
                .map(|(artist, streams)| json!({"artist": artist, "streams": streams}))
                .collect(),
        ),
        AnalysisKind::HighDanceEnergy => json!(analyzer.high_dance_energy()),
        AnalysisKind::AvgValencePerAlbum => Value::Array(
            analyzer
                .avg_valence_per_album()
                .into_iter()
                .map(|(album, avg)| json!({"album": album, "avg_valence": avg}))
                .collect(),
        ),
        AnalysisKind::AlbumsOver1mStreams => Value::Array(
            analyzer
                .albums_over_1m_streams()
                .into_iter()
                .map(|(album, streams)| json!({"album": album, "streams": streams}))
                .collect(),
        ),
        AnalysisKind::ArtistWithMostLikes => match analyzer.artist_with_most_likes() {
            Some((artist, likes)) => json!({"artist": artist, "likes": likes}),
            None => Value::Null,
        },
        AnalysisKind::Top3PerPlatform => Value::Array(
            analyzer
                .top3_per_platform()
                .into_iter()
                .map(|(platform, tracks)| {
                    let tracks: Vec<Value> = tracks
                        .into_iter()
                        .map(|(track, stream)| json!({"track": track, "stream": stream}))
                        .collect();
                    json!({"platform": platform.as_str(), "tracks": tracks})
                })
                .collect(),
        ),
        AnalysisKind::CountOfficialVideo => json!(analyzer.count_official_video()),
        AnalysisKind::HighLivenessLowAcoustic => json!(analyzer.high_liveness_low_acoustic()),
        AnalysisKind::FullyInstrumental => json!(analyzer.fully_instrumental()),
        AnalysisKind::TopEngagementArtist => match analyzer.top_engagement_artist() {
            Some((artist, rate)) => json!({"artist": artist, "engagement_rate": rate}),
            None => Value::Null,
        },
        AnalysisKind::Top3StreamedInAlbum => match album {
            Some(album) => Value::Array(
                analyzer
                    .top3_streamed_in_album(album)
                    .into_iter()
                    .map(|(track, stream)| json!({"track": track, "stream": stream}))
                    .collect(),
            ),
            None => json!({"error": "album name required"}),
        },
        AnalysisKind::AlbumsOver5Tracks2bViews => json!(analyzer.albums_over_5_tracks_2b_views()),
        AnalysisKind::DanceEnergyCorrelation => match analyzer.dance_energy_correlation() {
            Ok(r) => json!(r),
            Err(_) => json!("undefined"),
        },
        AnalysisKind::ArtistsAboveAvgSongCount => Value::Array(
            analyzer
                .artists_above_avg_song_count()
                .into_iter()
                .map(|(artist, count)| json!({"artist": artist, "song_count": count}))
                .collect(),
        ),
    }
}

fn print_table(
    headers: Vec<&str>,
    right_cols: &[usize],
    rows: Vec<Vec<String>>,
    limit: usize,
    empty_message: &str,
) {
    if rows.is_empty() {
        cli_style::print_empty_list(empty_message);
        return;
    }
    let shown = if limit > 0 { rows.len().min(limit) } else { rows.len() };
    let mut table = TableBuilder::new(headers).right_align(right_cols);
    for row in &rows[..shown] {
        table.add_row(row.iter().map(String::as_str).collect());
    }
    table.print();
    let hidden = rows.len() - shown;
    if hidden > 0 {
        cli_style::print_empty_list(&format!("{} more rows not shown", hidden));
    }
}

fn print_list(items: &[String], limit: usize, empty_message: &str) {
    if items.is_empty() {
        cli_style::print_empty_list(empty_message);
        return;
    }
    let shown = if limit > 0 { items.len().min(limit) } else { items.len() };
    for item in &items[..shown] {
        cli_style::print_list_item(item, 1);
    }
    let hidden = items.len() - shown;
    if hidden > 0 {
        cli_style::print_empty_list(&format!("{} more not shown", hidden));
    }
}
