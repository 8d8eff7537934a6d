mod github_stars;
mod site_footer;

pub use site_footer::SiteFooter;
