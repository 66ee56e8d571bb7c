use yew::prelude::*;

use crate::components::section::Section;
use crate::data::content::{DemoVideo, MediaItem};

#[derive(Properties, PartialEq)]
pub struct MediaProps {
    pub gallery: &'static [MediaItem],
    pub video: &'static DemoVideo,
}

#[function_component(Media)]
pub fn media(props: &MediaProps) -> Html {
    let video = props.video;

    html! {
        <Section id="media" eyebrow={Some("Media")} title="Images and Video">
            <div class="media-layout">
                <div class="panel hover-tip" data-tip="Image gallery section">
                    <h3 class="h3">{"Image Gallery"}</h3>
                    <p class="muted">{"Images showcasing our workflow and product forms."}</p>
                    <div class="media-grid">
                        {
                            props.gallery.iter().map(|item| html! {
                                <figure key={item.src} class="media-figure hover-tip" data-tip="Hover to preview">
                                    <img class="media-img" src={item.src} alt={item.alt} loading="lazy" />
                                    <figcaption class="media-cap">{item.alt}</figcaption>
                                </figure>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="video-card hover-tip" data-tip="Play the demo video">
                    <h3 class="h3">{"Video Showcase"}</h3>
                    <p class="muted">{"Example of embedding public video using HTML5."}</p>
                    <video class="video" controls=true preload="metadata" poster={video.poster}>
                        <source src={video.src} type={video.mime} />
                        {"Your browser does not support the video tag."}
                    </video>
                    <div class="tiny muted">
                        {"If external access is blocked, place the video file under "}
                        <code>{"assets/"}</code>
                        {" and point the source at a local path such as "}
                        <code>{"/assets/demo.mp4"}</code>
                        {"."}
                    </div>
                </div>
            </div>
        </Section>
    }
}
