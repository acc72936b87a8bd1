extern crate nalgebra as na;

use log::info;
use na::Vector3;
use std::path::{Path,PathBuf};
use std::fs::File;
use std::io::{BufRead,BufReader};

use crate::error::{PoseError, Result};
use crate::io::{parse_to_float, loading_parameters::{LineLayout,LoadingParameters}};
use crate::numerics::pose::quaternion_from_wxyz;
use crate::sensors::camera::PoseRecord;
use crate::Float;

pub const IMAGES_TXT: &str = "images.txt";

/// IMAGE_ID, QW, QX, QY, QZ, TX, TY, TZ
const MIN_FIELDS: usize = 8;
const NUMERIC_FIELDS: [&str;7] = ["qw","qx","qy","qz","tx","ty","tz"];

pub fn images_txt_path(input_dir: &Path) -> PathBuf {
    input_dir.join(IMAGES_TXT)
}

/**
 * Reads the whole file before parsing. A missing file is reported as NotFound,
 * any malformed data line fails the whole load.
 */
pub fn load_images_txt(file_path: &Path, parameters: &LoadingParameters) -> Result<Vec<PoseRecord>> {
    if !file_path.exists() {
        return Err(PoseError::NotFound(file_path.to_path_buf()));
    }

    let lines = {
        let file = File::open(file_path)?;
        read_lines(BufReader::new(file))?
    };
    info!("loading {} ({} lines, {})", file_path.display(), lines.len(), parameters);

    parse_lines(lines.iter().map(|l| l.as_str()), parameters)
}

pub fn parse_images_txt<R: BufRead>(reader: R, parameters: &LoadingParameters) -> Result<Vec<PoseRecord>> {
    let lines = read_lines(reader)?;
    parse_lines(lines.iter().map(|l| l.as_str()), parameters)
}

/**
 * Splits on '\n' and decodes each line on its own, so that invalid UTF-8 is
 * reported with its line number. A trailing '\r' is left to the trim in parse_lines.
 */
fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader.split(b'\n').enumerate().map(|(idx, bytes)| {
        String::from_utf8(bytes?).map_err(|e| PoseError::Parse {
            line: idx + 1,
            reason: format!("not valid UTF-8 ({})", e.utf8_error())
        })
    }).collect()
}

pub fn parse_lines<'a, I>(lines: I, parameters: &LoadingParameters) -> Result<Vec<PoseRecord>> where I: IntoIterator<Item = &'a str> {
    let mut records = Vec::<PoseRecord>::new();
    let mut observation_line_pending = false;

    for (idx, line) in lines.into_iter().enumerate() {
        let contents = line.trim();
        if contents.starts_with('#') {
            continue;
        }

        // The observation line belongs to the preceding pose, even when empty
        if observation_line_pending {
            observation_line_pending = false;
            continue;
        }

        if contents.is_empty() {
            continue;
        }

        records.push(parse_pose_line(idx + 1, contents)?);
        observation_line_pending = parameters.layout == LineLayout::Colmap;
    }

    Ok(records)
}

/**
 * Tokens 1-4 are the scalar first quaternion, tokens 5-7 the translation.
 * Anything after token 7 (camera id, image name, ...) is ignored.
 */
pub fn parse_pose_line(line: usize, contents: &str) -> Result<PoseRecord> {
    let values = contents.split_whitespace().collect::<Vec<&str>>();
    if values.len() < MIN_FIELDS {
        return Err(PoseError::Parse {
            line,
            reason: format!("expected at least {} fields, found {}", MIN_FIELDS, values.len())
        });
    }

    let numbers = values[1..MIN_FIELDS].iter().zip(NUMERIC_FIELDS.iter())
        .map(|(value, field)| parse_to_float(value, field, line))
        .collect::<Result<Vec<Float>>>()?;

    Ok(PoseRecord {
        line,
        label: String::from(values[0]),
        rotation: quaternion_from_wxyz(&[numbers[0],numbers[1],numbers[2],numbers[3]]),
        translation: Vector3::<Float>::new(numbers[4],numbers[5],numbers[6])
    })
}
