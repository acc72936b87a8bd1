use std::fmt;

/**
 * How data lines of images.txt are grouped.
 */
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum LineLayout {
    /// Every non-comment, non-blank line is a pose line
    EveryLine,
    /// COLMAP text model: each pose line is followed by one observation line (possibly empty)
    Colmap
}

#[derive(Debug,Copy,Clone)]
pub struct LoadingParameters {
    pub layout: LineLayout
}

impl Default for LoadingParameters {
    fn default() -> LoadingParameters {
        LoadingParameters { layout: LineLayout::EveryLine }
    }
}

impl fmt::Display for LoadingParameters {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "layout_{:?}", self.layout)
    }

}
