use askama::Template;

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home<'a> {
    pub service_name: &'a str,
    pub scoring_profile: &'a str,
}
