use clap::ValueEnum;
use std::fmt;

/// Every analysis that can be selected from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, ValueEnum)]
pub enum AnalysisKind {
    TracksWithArtists,
    TracksInAlbum,
    DistinctAlbumTypes,
    Top10MostViewed,
    TotalTrackCount,
    AvgDurationPerArtist,
    Top5ArtistsByStream,
    HighDanceEnergy,
    AvgValencePerAlbum,
    #[value(name = "albums-over-1m-streams")]
    AlbumsOver1mStreams,
    ArtistWithMostLikes,
    Top3PerPlatform,
    CountOfficialVideo,
    HighLivenessLowAcoustic,
    FullyInstrumental,
    TopEngagementArtist,
    Top3StreamedInAlbum,
    #[value(name = "albums-over-5-tracks-2b-views")]
    AlbumsOver5Tracks2bViews,
    DanceEnergyCorrelation,
    ArtistsAboveAvgSongCount,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 20] = [
        AnalysisKind::TracksWithArtists,
        AnalysisKind::TracksInAlbum,
        AnalysisKind::DistinctAlbumTypes,
        AnalysisKind::Top10MostViewed,
        AnalysisKind::TotalTrackCount,
        AnalysisKind::AvgDurationPerArtist,
        AnalysisKind::Top5ArtistsByStream,
        AnalysisKind::HighDanceEnergy,
        AnalysisKind::AvgValencePerAlbum,
        AnalysisKind::AlbumsOver1mStreams,
        AnalysisKind::ArtistWithMostLikes,
        AnalysisKind::Top3PerPlatform,
        AnalysisKind::CountOfficialVideo,
        AnalysisKind::HighLivenessLowAcoustic,
        AnalysisKind::FullyInstrumental,
        AnalysisKind::TopEngagementArtist,
        AnalysisKind::Top3StreamedInAlbum,
        AnalysisKind::AlbumsOver5Tracks2bViews,
        AnalysisKind::DanceEnergyCorrelation,
        AnalysisKind::ArtistsAboveAvgSongCount,
    ];

    /// Heading shown above the rendered result.
    pub fn title(self) -> &'static str {
        match self {
            AnalysisKind::TracksWithArtists => "Tracks with their artists",
            AnalysisKind::TracksInAlbum => "Tracks in album",
            AnalysisKind::DistinctAlbumTypes => "Distinct album types",
            AnalysisKind::Top10MostViewed => "Top 10 most viewed tracks",
            AnalysisKind::TotalTrackCount => "Total track count",
            AnalysisKind::AvgDurationPerArtist => "Average duration per artist",
            AnalysisKind::Top5ArtistsByStream => "Top 5 artists by total streams",
            AnalysisKind::HighDanceEnergy => "High danceability and energy",
            AnalysisKind::AvgValencePerAlbum => "Average valence per album",
            AnalysisKind::AlbumsOver1mStreams => "Albums with over 1M total streams",
            AnalysisKind::ArtistWithMostLikes => "Artist with most likes",
            AnalysisKind::Top3PerPlatform => "Top 3 streamed tracks per platform",
            AnalysisKind::CountOfficialVideo => "Tracks with an official video",
            AnalysisKind::HighLivenessLowAcoustic => "High liveness, low acousticness",
            AnalysisKind::FullyInstrumental => "Fully instrumental tracks",
            AnalysisKind::TopEngagementArtist => "Artist with highest engagement rate",
            AnalysisKind::Top3StreamedInAlbum => "Top 3 streamed tracks in album",
            AnalysisKind::AlbumsOver5Tracks2bViews => "Albums with over 5 tracks and 2B views",
            AnalysisKind::DanceEnergyCorrelation => "Danceability / energy correlation",
            AnalysisKind::ArtistsAboveAvgSongCount => "Artists above average song count",
        }
    }

    /// Stable identifier, used as the key in JSON reports.
    pub fn key(self) -> &'static str {
        match self {
            AnalysisKind::TracksWithArtists => "tracks_with_artists",
            AnalysisKind::TracksInAlbum => "tracks_in_album",
            AnalysisKind::DistinctAlbumTypes => "distinct_album_types",
            AnalysisKind::Top10MostViewed => "top10_most_viewed",
            AnalysisKind::TotalTrackCount => "total_track_count",
            AnalysisKind::AvgDurationPerArtist => "avg_duration_per_artist",
            AnalysisKind::Top5ArtistsByStream => "top5_artists_by_stream",
            AnalysisKind::HighDanceEnergy => "high_dance_energy",
            AnalysisKind::AvgValencePerAlbum => "avg_valence_per_album",
            AnalysisKind::AlbumsOver1mStreams => "albums_over_1m_streams",
            AnalysisKind::ArtistWithMostLikes => "artist_with_most_likes",
            AnalysisKind::Top3PerPlatform => "top3_per_platform",
            AnalysisKind::CountOfficialVideo => "count_official_video",
            AnalysisKind::HighLivenessLowAcoustic => "high_liveness_low_acoustic",
            AnalysisKind::FullyInstrumental => "fully_instrumental",
            AnalysisKind::TopEngagementArtist => "top_engagement_artist",
            AnalysisKind::Top3StreamedInAlbum => "top3_streamed_in_album",
            AnalysisKind::AlbumsOver5Tracks2bViews => "albums_over_5_tracks_2b_views",
            AnalysisKind::DanceEnergyCorrelation => "dance_energy_correlation",
            AnalysisKind::ArtistsAboveAvgSongCount => "artists_above_avg_song_count",
        }
    }

    /// Analyses that only make sense against a named album.
    pub fn requires_album(self) -> bool {
        matches!(
            self,
            AnalysisKind::TracksInAlbum | AnalysisKind::Top3StreamedInAlbum
        )
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
