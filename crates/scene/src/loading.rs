/// Images the globe waits for before it starts animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Surface,
    Bump,
    Specular,
    Marker,
}

impl Asset {
    pub const ALL: [Asset; 4] = [Asset::Surface, Asset::Bump, Asset::Specular, Asset::Marker];

    fn bit(self) -> u8 {
        match self {
            Asset::Surface => 1,
            Asset::Bump => 1 << 1,
            Asset::Specular => 1 << 2,
            Asset::Marker => 1 << 3,
        }
    }
}

/// Tracks which assets have arrived. Repeated loads of one asset count once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetGate {
    loaded: u8,
}

impl AssetGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `asset` as loaded; returns whether every asset is now in.
    pub fn mark_loaded(&mut self, asset: Asset) -> bool {
        self.loaded |= asset.bit();
        self.is_ready()
    }

    pub fn is_loaded(&self, asset: Asset) -> bool {
        self.loaded & asset.bit() != 0
    }

    pub fn is_ready(&self) -> bool {
        Asset::ALL.iter().all(|a| self.is_loaded(*a))
    }

    pub fn pending(&self) -> Vec<Asset> {
        Asset::ALL
            .into_iter()
            .filter(|a| !self.is_loaded(*a))
            .collect()
    }
}
