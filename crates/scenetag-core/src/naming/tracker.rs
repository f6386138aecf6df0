use super::NameSynthesizer;
use crate::types::{ExtractedMetadata, ReleaseType};

impl NameSynthesizer {
    /// Human-readable title for tracker uploads:
    /// `Title Year SxxEyy LANG - LANG 1080p Source Audio HDR Codec-Group`.
    #[must_use]
    pub fn tracker_title(&self, meta: &ExtractedMetadata) -> String {
        let mut tokens: Vec<String> = Vec::new();
        tokens.extend(Self::title(meta));
        tokens.extend(meta.year.map(|y| y.to_string()));
        tokens.extend(meta.series_marker());

        if !meta.audio_languages.is_empty() {
            let mut languages = meta.audio_languages.clone();
            languages.sort();
            tokens.push(languages.join(" - "));
        }

        tokens.extend(meta.resolution.map(|r| r.to_string()));
        tokens.extend(self.tracker_source(meta));
        tokens.extend(meta.audio.clone());
        tokens.extend(meta.hdr_info.iter().cloned());

        let joined = tokens.join(" ");
        let dotted = self.re_dots.replace_all(&joined, ".");
        let mut title = self
            .re_whitespace
            .replace_all(&dotted, " ")
            .trim()
            .to_string();
        if let Some(codec) = self.codec(meta) {
            if !title.is_empty() {
                title.push(' ');
            }
            title.push_str(codec.trim());
        }
        title.push_str(&self.group_suffix(meta));
        title
    }

    fn tracker_source(&self, meta: &ExtractedMetadata) -> Option<String> {
        match meta.release_type {
            Some(ReleaseType::Remux) => Some("BluRay REMUX".to_string()),
            Some(release_type @ (ReleaseType::WebDl | ReleaseType::WebRip)) => Some(
                meta.service
                    .as_deref()
                    .map_or_else(
                        || release_type.scene_label().to_string(),
                        |service| format!("{service} {}", release_type.scene_label()),
                    ),
            ),
            Some(ReleaseType::Encode | ReleaseType::DvdRip) | None => {
                meta.source.map(|s| s.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::NamingConfig;
    use crate::naming::NameSynthesizer;
    use crate::types::{MetadataBuilder, ReleaseType, Resolution, Source};

    fn synthesizer() -> NameSynthesizer {
        NameSynthesizer::new(&NamingConfig::default()).unwrap()
    }

    #[test]
    fn encode_with_languages() {
        let meta = MetadataBuilder::new("Material.Love", "NoGroup")
            .resolution(Some(Resolution::FHD1080))
            .video(Some("AVC".into()), Some("x264".into()), Some("x264".into()))
            .classification(Some(Source::BluRay), Some(ReleaseType::Encode))
            .audio(
                Some("DD5.1".into()),
                vec!["ITALIAN".into(), "ENGLISH".into()],
            )
            .release_group("iSlaNd")
            .title(Some("Material Love".into()), Some(2025))
            .build();
        assert_eq!(
            synthesizer().tracker_title(&meta),
            "Material Love 2025 ENGLISH - ITALIAN 1080p BluRay DD5.1 x264-iSlaNd"
        );
    }

    #[test]
    fn remux_is_a_bluray_qualifier() {
        let meta = MetadataBuilder::new("Dune", "NoGroup")
            .resolution(Some(Resolution::UHD2160))
            .video(Some("HEVC".into()), Some("HVEC".into()), None)
            .classification(Some(Source::BluRay), Some(ReleaseType::Remux))
            .audio(Some("TrueHD.Atmos.7.1".into()), vec!["ENGLISH".into()])
            .hdr(vec!["DV".into(), "HDR10".into()])
            .title(Some("Dune".into()), Some(2021))
            .build();
        assert_eq!(
            synthesizer().tracker_title(&meta),
            "Dune 2021 ENGLISH 2160p BluRay REMUX TrueHD.Atmos.7.1 DV HDR10 HVEC"
        );
    }

    #[test]
    fn web_series_with_service() {
        let meta = MetadataBuilder::new("Loki", "NoGroup")
            .resolution(Some(Resolution::FHD1080))
            .video(Some("AVC".into()), Some("x264".into()), Some("x264".into()))
            .classification(Some(Source::Web), Some(ReleaseType::WebRip))
            .audio(Some("DDP5.1".into()), vec![])
            .service(Some("DSNP".into()))
            .episode(Some(1), Some(3))
            .release_group("GRP")
            .title(Some("Loki".into()), None)
            .build();
        assert_eq!(
            synthesizer().tracker_title(&meta),
            "Loki S01E03 1080p DSNP WEBRip DDP5.1 x264-GRP"
        );
    }

    #[test]
    fn whitespace_is_collapsed() {
        let meta = MetadataBuilder::new("x", "NoGroup")
            .classification(Some(Source::Dvd), Some(ReleaseType::DvdRip))
            .title(Some("  Old   Film ".into()), None)
            .build();
        let title = synthesizer().tracker_title(&meta);
        assert_eq!(title, "Old Film DVD");
        assert_eq!(synthesizer().tracker_title(&meta), title);
    }

    #[test]
    fn dot_runs_and_separators_are_removed() {
        let meta = MetadataBuilder::new("And.Justice.for.All.1979.1080p.BluRay.x264-GRP", "NoGroup")
            .resolution(Some(Resolution::FHD1080))
            .video(Some("AVC".into()), Some("x264".into()), Some("x264".into()))
            .classification(Some(Source::BluRay), Some(ReleaseType::Encode))
            .release_group("GRP")
            .title(Some("...And Justice for All".into()), Some(1979))
            .build();
        let title = synthesizer().tracker_title(&meta);
        assert_eq!(title, "And Justice for All 1979 1080p BluRay x264-GRP");
        assert!(!title.contains(".."));

        let meta = MetadataBuilder::new("x", "NoGroup")
            .title(Some("Face/Off".into()), Some(1997))
            .build();
        assert_eq!(synthesizer().tracker_title(&meta), "Face Off 1997");
    }
}
