use crate::config::{NamingConfig, lookup};
use crate::types::AudioAttributes;

/// Scene-style channel layout for a raw channel count.
#[must_use]
pub fn channel_suffix(channels: Option<u32>) -> String {
    match channels.unwrap_or(2) {
        6 => "5.1".to_string(),
        8 => "7.1".to_string(),
        2 => "2.0".to_string(),
        n => n.to_string(),
    }
}

fn has_object_audio(track: &AudioAttributes) -> bool {
    [&track.additional_features, &track.commercial_name]
        .into_iter()
        .flatten()
        .any(|field| {
            let upper = field.to_uppercase();
            upper.contains("ATMOS") || upper.contains("JOC")
        })
}

fn is_master_audio(track: &AudioAttributes) -> bool {
    track
        .commercial_name
        .as_deref()
        .is_some_and(|name| name.to_uppercase().contains("MASTER AUDIO"))
}

/// Normalized audio token for one track, e.g. `DDP5.1.Atmos` or
/// `TrueHD.Atmos.7.1`.
#[must_use]
pub fn audio_token(track: &AudioAttributes, config: &NamingConfig) -> String {
    let Some(format) = track.format.as_deref().map(str::trim).filter(|f| !f.is_empty()) else {
        return "Unknown".to_string();
    };
    let ch = channel_suffix(track.channels);
    let atmos = has_object_audio(track);

    match format.to_uppercase().as_str() {
        "AC-3" | "AC3" => format!("DD{ch}"),
        "E-AC-3" | "EAC3" if atmos => format!("DDP{ch}.Atmos"),
        "E-AC-3" | "EAC3" => format!("DDP{ch}"),
        "TRUEHD" | "MLP FBA" if atmos => format!("TrueHD.Atmos.{ch}"),
        "TRUEHD" | "MLP FBA" => format!("TrueHD.{ch}"),
        "DTS-HD MA" => format!("DTS-HD.MA.{ch}"),
        "DTS" if is_master_audio(track) => format!("DTS-HD.MA.{ch}"),
        "DTS" => format!("DTS.{ch}"),
        _ => lookup(&config.audio_format_mapping, format)
            .map_or_else(|| format.to_string(), str::to_string),
    }
}

/// Normalized language name: configured display name, or the code uppercased.
#[must_use]
pub fn normalize_language(code: &str, config: &NamingConfig) -> String {
    let code = code.trim();
    lookup(&config.language_mapping, &code.to_lowercase())
        .map_or_else(|| code.to_uppercase(), str::to_string)
}

/// Languages of every audio track, in track order, without duplicates.
pub fn audio_languages<'a, I>(tracks: I, config: &NamingConfig) -> Vec<String>
where
    I: IntoIterator<Item = &'a AudioAttributes>,
{
    let mut languages: Vec<String> = Vec::new();
    for language in tracks
        .into_iter()
        .filter_map(|t| t.language.as_deref())
        .filter(|l| !l.trim().is_empty())
    {
        let name = normalize_language(language, config);
        if !languages.contains(&name) {
            languages.push(name);
        }
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(format: &str, channels: Option<u32>, features: Option<&str>) -> AudioAttributes {
        AudioAttributes {
            format: Some(format.to_string()),
            channels,
            additional_features: features.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn channel_layouts() {
        assert_eq!(channel_suffix(Some(6)), "5.1");
        assert_eq!(channel_suffix(Some(8)), "7.1");
        assert_eq!(channel_suffix(Some(2)), "2.0");
        assert_eq!(channel_suffix(None), "2.0");
        assert_eq!(channel_suffix(Some(1)), "1");
    }

    #[test]
    fn dolby_formats() {
        let config = NamingConfig::default();
        assert_eq!(audio_token(&track("AC-3", Some(6), None), &config), "DD5.1");
        assert_eq!(audio_token(&track("E-AC-3", Some(6), None), &config), "DDP5.1");
        assert_eq!(
            audio_token(&track("E-AC-3", Some(6), Some("JOC")), &config),
            "DDP5.1.Atmos"
        );
        assert_eq!(
            audio_token(&track("MLP FBA", Some(8), Some("16-ch")), &config),
            "TrueHD.7.1"
        );
        let truehd = AudioAttributes {
            commercial_name: Some("Dolby TrueHD with Dolby Atmos".into()),
            ..track("TrueHD", Some(8), None)
        };
        assert_eq!(audio_token(&truehd, &config), "TrueHD.Atmos.7.1");
    }

    #[test]
    fn dts_formats() {
        let config = NamingConfig::default();
        assert_eq!(audio_token(&track("DTS", Some(6), None), &config), "DTS.5.1");
        assert_eq!(
            audio_token(&track("DTS-HD MA", Some(8), None), &config),
            "DTS-HD.MA.7.1"
        );
        let ma = AudioAttributes {
            commercial_name: Some("DTS-HD Master Audio".into()),
            ..track("DTS", Some(8), Some("XLL"))
        };
        assert_eq!(audio_token(&ma, &config), "DTS-HD.MA.7.1");
    }

    #[test]
    fn other_formats_use_table_or_raw() {
        let config = NamingConfig::default();
        assert_eq!(audio_token(&track("FLAC", Some(2), None), &config), "FLAC");
        assert_eq!(audio_token(&track("opus", Some(2), None), &config), "Opus");
        assert_eq!(audio_token(&track("Vorbis", Some(2), None), &config), "Vorbis");
        assert_eq!(audio_token(&AudioAttributes::default(), &config), "Unknown");
    }

    #[test]
    fn languages_are_mapped_and_deduplicated() {
        let config = NamingConfig::default();
        let tracks = [
            AudioAttributes {
                language: Some("it".into()),
                ..Default::default()
            },
            AudioAttributes {
                language: Some("ITA".into()),
                ..Default::default()
            },
            AudioAttributes::default(),
            AudioAttributes {
                language: Some("en".into()),
                ..Default::default()
            },
            AudioAttributes {
                language: Some("ko".into()),
                ..Default::default()
            },
        ];
        assert_eq!(
            audio_languages(&tracks, &config),
            vec!["ITALIAN", "ENGLISH", "KO"]
        );
    }
}
