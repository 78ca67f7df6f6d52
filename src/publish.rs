use crate::config::Credentials;
use crate::error::SlideError;
use chrono::Utc;
use log::info;
use std::path::{Path, PathBuf};

/// Opaque identifier of an uploaded media item, as reported by the
/// upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaId(pub String);

/// The upload collaborator contract. A session lives from a successful
/// `login` to `logout`; uploads outside a session fail with an upload
/// error. `album_upload` requires at least two images; a single image
/// must go through `photo_upload` instead (see [`publish_story`], which
/// owns that routing).
pub trait Publisher {
    fn login(&mut self, credentials: &Credentials) -> Result<(), SlideError>;
    fn photo_upload(&mut self, path: &Path, caption: &str) -> Result<MediaId, SlideError>;
    fn album_upload(&mut self, paths: &[PathBuf], caption: &str) -> Result<MediaId, SlideError>;
    fn logout(&mut self);
}

/// Route a rendered slide set to the correct upload call: exactly one
/// image goes up as a single photo, two or more as an album, and an empty
/// set is an upload error. Never both.
pub fn publish_story(
    publisher: &mut dyn Publisher,
    paths: &[PathBuf],
    caption: &str,
) -> Result<MediaId, SlideError> {
    match paths {
        [] => Err(SlideError::Upload(
            "story produced no rendered slides".into(),
        )),
        [single] => publisher.photo_upload(single, caption),
        many => publisher.album_upload(many, caption),
    }
}

/// A publisher that stages each post into a numbered directory under an
/// archive root, alongside a small manifest with the caption and the
/// posting time. Useful for dry runs and as the reference implementation
/// of the session/routing contract; a real network client only has to
/// implement the same four operations.
pub struct ArchivePublisher {
    root: PathBuf,
    logged_in: bool,
    posts: usize,
}

impl ArchivePublisher {
    pub fn new<P: Into<PathBuf>>(root: P) -> ArchivePublisher {
        ArchivePublisher {
            root: root.into(),
            logged_in: false,
            posts: 0,
        }
    }

    fn stage(&mut self, paths: &[PathBuf], caption: &str) -> Result<MediaId, SlideError> {
        if !self.logged_in {
            return Err(SlideError::Upload("no active session".into()));
        }

        self.posts += 1;
        let post_dir = self.root.join(format!("post_{}", self.posts));
        std::fs::create_dir_all(&post_dir)?;

        for path in paths {
            let name = path
                .file_name()
                .ok_or_else(|| SlideError::Upload(format!("bad image path {}", path.display())))?;
            std::fs::copy(path, post_dir.join(name))?;
        }

        let manifest = format!(
            "posted_at: {}\nimages: {}\ncaption: {caption}\n",
            Utc::now().to_rfc3339(),
            paths.len(),
        );
        std::fs::write(post_dir.join("manifest.txt"), manifest)?;

        info!("archived post {} ({} images)", self.posts, paths.len());
        Ok(MediaId(format!("archive-{}", self.posts)))
    }
}

impl Publisher for ArchivePublisher {
    fn login(&mut self, credentials: &Credentials) -> Result<(), SlideError> {
        if credentials.username.is_empty() {
            return Err(SlideError::Auth("empty username".into()));
        }
        self.logged_in = true;
        Ok(())
    }

    fn photo_upload(&mut self, path: &Path, caption: &str) -> Result<MediaId, SlideError> {
        self.stage(&[path.to_path_buf()], caption)
    }

    fn album_upload(&mut self, paths: &[PathBuf], caption: &str) -> Result<MediaId, SlideError> {
        if paths.len() < 2 {
            return Err(SlideError::Upload(
                "album upload requires at least 2 images".into(),
            ));
        }
        self.stage(paths, caption)
    }

    fn logout(&mut self) {
        self.logged_in = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records which upload entry point was taken.
    #[derive(Default)]
    struct RoutingProbe {
        photo_calls: usize,
        album_calls: usize,
        last_album_len: usize,
    }

    impl Publisher for RoutingProbe {
        fn login(&mut self, _: &Credentials) -> Result<(), SlideError> {
            Ok(())
        }

        fn photo_upload(&mut self, _: &Path, _: &str) -> Result<MediaId, SlideError> {
            self.photo_calls += 1;
            Ok(MediaId("photo".into()))
        }

        fn album_upload(&mut self, paths: &[PathBuf], _: &str) -> Result<MediaId, SlideError> {
            self.album_calls += 1;
            self.last_album_len = paths.len();
            Ok(MediaId("album".into()))
        }

        fn logout(&mut self) {}
    }

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("slide_{i}.jpg"))).collect()
    }

    #[test]
    fn one_image_routes_to_photo_upload() {
        let mut probe = RoutingProbe::default();
        publish_story(&mut probe, &paths(1), "caption").unwrap();
        assert_eq!(probe.photo_calls, 1);
        assert_eq!(probe.album_calls, 0);
    }

    #[test]
    fn several_images_route_to_album_upload() {
        let mut probe = RoutingProbe::default();
        publish_story(&mut probe, &paths(5), "caption").unwrap();
        assert_eq!(probe.photo_calls, 0);
        assert_eq!(probe.album_calls, 1);
        assert_eq!(probe.last_album_len, 5);
    }

    #[test]
    fn empty_set_is_an_upload_error() {
        let mut probe = RoutingProbe::default();
        assert!(matches!(
            publish_story(&mut probe, &[], "caption"),
            Err(SlideError::Upload(_))
        ));
        assert_eq!(probe.photo_calls + probe.album_calls, 0);
    }

    #[test]
    fn archive_publisher_rejects_uploads_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut publisher = ArchivePublisher::new(dir.path());
        let result = publisher.photo_upload(Path::new("missing.jpg"), "caption");
        assert!(matches!(result, Err(SlideError::Upload(_))));
    }

    #[test]
    fn archive_publisher_rejects_single_image_albums() {
        let dir = tempfile::tempdir().unwrap();
        let mut publisher = ArchivePublisher::new(dir.path());
        publisher
            .login(&Credentials {
                username: "user".into(),
                password: "pass".into(),
            })
            .unwrap();
        let result = publisher.album_upload(&paths(1), "caption");
        assert!(matches!(result, Err(SlideError::Upload(_))));
    }

    #[test]
    fn archive_publisher_stages_album_with_manifest() {
        let dir = tempfile::tempdir().unwrap();

        // render stand-ins: two small files to copy
        let img_a = dir.path().join("output_1.jpg");
        let img_b = dir.path().join("output_2.jpg");
        std::fs::write(&img_a, b"a").unwrap();
        std::fs::write(&img_b, b"b").unwrap();

        let root = dir.path().join("archive");
        let mut publisher = ArchivePublisher::new(&root);
        publisher
            .login(&Credentials {
                username: "user".into(),
                password: "pass".into(),
            })
            .unwrap();

        let media = publisher
            .album_upload(&[img_a, img_b], "the caption")
            .unwrap();
        assert_eq!(media, MediaId("archive-1".into()));

        let post_dir = root.join("post_1");
        assert!(post_dir.join("output_1.jpg").exists());
        assert!(post_dir.join("output_2.jpg").exists());
        let manifest = std::fs::read_to_string(post_dir.join("manifest.txt")).unwrap();
        assert!(manifest.contains("caption: the caption"));
        assert!(manifest.contains("images: 2"));
    }
}
