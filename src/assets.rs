// Static image catalog. Everything the site renders is resolved here by
// name, so a missing image is an unresolved identifier at compile time
// rather than a broken reference at runtime.

#[derive(Clone, Copy, PartialEq)]
pub struct Asset {
    path: &'static str,
    width: u32,
}

impl Asset {
    pub fn url(&self) -> &'static str {
        self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

pub const LOGO: Asset = Asset {
    path: "/assets/herald-logo@2x.png",
    width: 110,
};

pub const HAMBURGER: Asset = Asset {
    path: "/assets/hamburger@2x.png",
    width: 30,
};
