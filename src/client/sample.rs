//! Static fallback data for public views.
//!
//! The homepage stays visually populated without a live backend: when the
//! artist list fails or comes back empty, the members section renders this
//! sample instead.

use super::resources::ArtistsResource;
use super::ApiClient;
use crate::models::{now_rfc3339, Artist};

/// The hardcoded members-section sample.
pub fn sample_artists() -> Vec<Artist> {
    let entries = [
        (
            "sample-1",
            "MC Horizon",
            "Founding member and lyricist, mentoring the next wave of writers.",
            "/images/artists/mc-horizon.jpg",
        ),
        (
            "sample-2",
            "Lady Cadence",
            "Vocalist and producer running the foundation's studio workshops.",
            "/images/artists/lady-cadence.jpg",
        ),
        (
            "sample-3",
            "DJ Meridian",
            "Resident DJ spinning at every community block party.",
            "/images/artists/dj-meridian.jpg",
        ),
        (
            "sample-4",
            "Verse Kinetic",
            "Spoken-word artist leading the youth open-mic program.",
            "/images/artists/verse-kinetic.jpg",
        ),
        (
            "sample-5",
            "Breakline Crew",
            "Breakdance collective teaching weekly classes at the center.",
            "/images/artists/breakline-crew.jpg",
        ),
    ];

    entries
        .iter()
        .map(|(id, name, bio, image_url)| Artist {
            id: (*id).to_string(),
            name: (*name).to_string(),
            bio: (*bio).to_string(),
            genre: "Hip-Hop".to_string(),
            image_url: (*image_url).to_string(),
            social_links: String::new(),
            is_featured: true,
            created_at: now_rfc3339(),
            updated_at: now_rfc3339(),
        })
        .collect()
}

/// Artists for the homepage members section: the live list when it has
/// entries, the sample otherwise (backend failure included).
pub async fn featured_artists_or_sample(client: &ApiClient) -> Vec<Artist> {
    let live = client.list_or_empty::<ArtistsResource>().await;
    if live.is_empty() {
        tracing::info!("Artist list unavailable or empty, using sample data");
        sample_artists()
    } else {
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_five_featured_artists() {
        let sample = sample_artists();
        assert_eq!(sample.len(), 5);
        assert!(sample.iter().all(|artist| artist.is_featured));
    }
}
