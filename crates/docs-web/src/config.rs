//! Site content: name, links and the guide catalogue.
//! Compiled in so SSR and hydration render from the same data.

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub base_url: &'static str,
    pub github_url: &'static str,
    pub guides: &'static [Guide],
}

pub struct Guide {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub sections: &'static [GuideSection],
}

pub struct GuideSection {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

impl SiteConfig {
    pub fn guide(&self, slug: &str) -> Option<&'static Guide> {
        self.guides.iter().find(|g| g.slug == slug)
    }
}

impl Guide {
    pub fn href(&self) -> String {
        format!("/docs/{}", self.slug)
    }
}

pub const CONFIG: SiteConfig = SiteConfig {
    name: "Docs Web",
    tagline: "Guides and reference for building with the toolkit.",
    base_url: "https://docs.example.com",
    github_url: "https://github.com/example/docs-web",
    guides: &[
        Guide {
            slug: "quickstart",
            title: "Quickstart",
            summary: "Install the toolkit and render your first page in a few minutes.",
            sections: &[
                GuideSection {
                    id: "install",
                    title: "Install",
                    body: "Add the crate to your workspace and enable the ssr feature for the server binary.",
                },
                GuideSection {
                    id: "run",
                    title: "Run the dev server",
                    body: "Start the site with cargo leptos watch and open the printed address in a browser.",
                },
            ],
        },
        Guide {
            slug: "buttons",
            title: "Buttons",
            summary: "Pick a variant, add an arrow, and turn any button into a link.",
            sections: &[
                GuideSection {
                    id: "variants",
                    title: "Variants",
                    body: "Five presets are available: primary, secondary, filled, outline and text.",
                },
                GuideSection {
                    id: "links",
                    title: "Links",
                    body: "Give a button an href and it renders as a link. External URLs open in a new tab.",
                },
            ],
        },
        Guide {
            slug: "deployment",
            title: "Deployment",
            summary: "Build a release bundle and serve it behind your proxy of choice.",
            sections: &[GuideSection {
                id: "release",
                title: "Release build",
                body: "Run cargo leptos build --release and ship the binary together with target/site.",
            }],
        },
    ],
};
