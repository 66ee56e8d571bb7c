use yew::{BaseComponent, LocalServerRenderer};

/// Render a component to an HTML string with Yew's server renderer.
pub fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, async move {
        LocalServerRenderer::<C>::with_props(props).render().await
    })
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
