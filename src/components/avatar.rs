use log::debug;
use yew::prelude::*;

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400">
  <defs>
    <linearGradient id="g" x1="0" x2="1" y1="0" y2="1">
      <stop stop-color="#7c3aed" offset="0"/>
      <stop stop-color="#06b6d4" offset="1"/>
    </linearGradient>
  </defs>
  <rect width="400" height="400" rx="32" fill="url(#g)"/>
  <circle cx="200" cy="160" r="68" fill="rgba(255,255,255,0.92)"/>
  <path d="M92 340c24-64 74-96 108-96s84 32 108 96" fill="rgba(255,255,255,0.92)"/>
  <text x="200" y="386" text-anchor="middle" font-family="system-ui, -apple-system" font-size="16" fill="rgba(255,255,255,0.95)">Team</text>
</svg>"##;

/// The placeholder portrait as an inline `data:` URI.
pub fn placeholder_data_uri() -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(PLACEHOLDER_SVG))
}

/// Which image an avatar shows. Falls back to the placeholder at most once
/// and never goes back to the photo.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarSource {
    photo: Option<String>,
    fell_back: bool,
}

impl AvatarSource {
    pub fn new(photo: Option<String>) -> Self {
        let fell_back = photo.is_none();
        Self { photo, fell_back }
    }

    pub fn showing_placeholder(&self) -> bool {
        self.fell_back
    }

    pub fn src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match (&self.photo, self.fell_back) {
            (Some(photo), false) => photo,
            _ => placeholder,
        }
    }

    /// State after the current image failed to load, or `None` when there is
    /// nothing left to fall back to.
    pub fn failed(&self) -> Option<Self> {
        if self.fell_back {
            return None;
        }
        Some(Self {
            photo: self.photo.clone(),
            fell_back: true,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    #[prop_or_default]
    pub src: Option<String>,
    pub alt: String,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let placeholder = use_memo(|_| placeholder_data_uri(), ());
    let source = {
        let src = props.src.clone();
        use_state(move || AvatarSource::new(src))
    };

    let onerror = {
        let source = source.clone();
        let alt = props.alt.clone();
        Callback::from(move |_: Event| {
            if let Some(next) = source.failed() {
                debug!("photo for {} failed to load, showing placeholder", alt);
                source.set(next);
            }
        })
    };

    html! {
        <img
            class={classes!("avatar", source.showing_placeholder().then(|| "avatar-placeholder"))}
            src={source.src(&placeholder).to_string()}
            alt={props.alt.clone()}
            loading="lazy"
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_an_encoded_svg_uri() {
        let uri = placeholder_data_uri();
        assert!(uri.starts_with("data:image/svg+xml,"));
        let payload = &uri["data:image/svg+xml,".len()..];
        assert!(!payload.contains('<'));
        assert!(!payload.contains('"'));
        assert!(!payload.contains('#'));
        assert_eq!(urlencoding::decode(payload).unwrap(), PLACEHOLDER_SVG);
    }

    #[test]
    fn photo_is_shown_until_it_fails() {
        let source = AvatarSource::new(Some("/assets/team/memberA.jpg".to_string()));
        assert!(!source.showing_placeholder());
        assert_eq!(source.src("placeholder"), "/assets/team/memberA.jpg");

        let fallen = source.failed().expect("first failure falls back");
        assert!(fallen.showing_placeholder());
        assert_eq!(fallen.src("placeholder"), "placeholder");
    }

    #[test]
    fn broken_photo_is_never_retried() {
        let source = AvatarSource::new(Some("/assets/missing.jpg".to_string()));
        let fallen = source.failed().expect("first failure falls back");
        assert_eq!(fallen.failed(), None);
        assert_eq!(fallen.src("placeholder"), "placeholder");
    }

    #[test]
    fn missing_photo_starts_on_placeholder() {
        let source = AvatarSource::new(None);
        assert!(source.showing_placeholder());
        assert_eq!(source.src("placeholder"), "placeholder");
        assert_eq!(source.failed(), None);
    }
}
