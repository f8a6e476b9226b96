//! Reading and writing occupancy grids as binary PGM (`P5`) rasters, the format map servers
//! use for saved maps.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read, Write},
    path::Path,
};

use image::{
    codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding},
    ColorType, ImageEncoder,
};

use crate::{CellState, Error, Grid, Point};

pub const UNSCANNED_SAMPLE: u8 = 205;
pub const INDOOR_SAMPLE: u8 = 254;
pub const BORDER_SAMPLE: u8 = 0;

/// Map a raw sample to a cell state. Values outside the table are treated as obstacles.
pub fn legalize(sample: u16) -> CellState {
    match sample {
        s if s == u16::from(UNSCANNED_SAMPLE) => CellState::Unscanned,
        s if s == u16::from(INDOOR_SAMPLE) => CellState::Indoor,
        _ => CellState::Border,
    }
}

/// The sample written for a cell state. Outdoor is a working label and has none.
pub fn sample_of(state: CellState) -> Option<u8> {
    match state {
        CellState::Unscanned => Some(UNSCANNED_SAMPLE),
        CellState::Indoor => Some(INDOOR_SAMPLE),
        CellState::Border => Some(BORDER_SAMPLE),
        CellState::Outdoor => None,
    }
}

fn malformed(e: impl std::fmt::Display) -> Error {
    Error::MalformedInput(e.to_string())
}

/// Decode a binary graymap. Samples are taken as-is, one byte each when the declared maximum is
/// below 256 and two big-endian bytes otherwise.
pub fn decode<R: BufRead>(reader: R) -> Result<Grid, Error> {
    let decoder = PnmDecoder::new(reader).map_err(malformed)?;

    if !matches!(
        decoder.subtype(),
        PnmSubtype::Graymap(SampleEncoding::Binary)
    ) {
        return Err(Error::MalformedInput(format!(
            "expected a binary graymap (P5), found {:?}",
            decoder.subtype()
        )));
    }

    let (mut reader, header) = decoder.into_inner();
    let width = header.width() as usize;
    let height = header.height() as usize;
    let wide = header.maximal_sample() > 255;

    let sample_len = if wide { 2 } else { 1 };
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(sample_len))
        .ok_or_else(|| {
            Error::MalformedInput(format!("{}x{} raster is too large", width, height))
        })?;

    // the header is untrusted, only buffer what the file actually holds
    let mut bytes = Vec::new();
    reader
        .by_ref()
        .take(expected as u64)
        .read_to_end(&mut bytes)
        .map_err(malformed)?;
    if bytes.len() != expected {
        return Err(Error::MalformedInput(format!(
            "expected {} bytes of pixel data for a {}x{} raster, found {}",
            expected,
            width,
            height,
            bytes.len()
        )));
    }

    let samples: Vec<u16> = if wide {
        bytes
            .chunks_exact(2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
            .collect()
    } else {
        bytes.into_iter().map(u16::from).collect()
    };

    let unknown = samples
        .iter()
        .filter(|s| legalize(**s) == CellState::Border && **s != u16::from(BORDER_SAMPLE))
        .count();
    if unknown > 0 {
        log::warn!("{} samples outside the cell table were read as border", unknown);
    }

    let cells = samples.into_iter().map(legalize).collect();
    Grid::from_cells(height, width, cells)
}

/// Encode a grid as a binary graymap with maximum value 255
pub fn encode<W: Write>(grid: &Grid, writer: W) -> Result<(), Error> {
    let pixels = grid
        .points()
        .zip(grid.cells())
        .map(|(point, state)| {
            sample_of(*state).ok_or(Error::UnencodableCell {
                row: point.row,
                col: point.col,
            })
        })
        .collect::<Result<Vec<u8>, Error>>()?;

    let width = u32::try_from(grid.cols()).map_err(malformed)?;
    let height = u32::try_from(grid.rows()).map_err(malformed)?;

    PnmEncoder::new(writer)
        .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
        .write_image(&pixels, width, height, ColorType::L8)?;

    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<Grid, Error> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Encode the whole raster in memory first, so a failure never leaves a partial file behind
pub fn save(grid: &Grid, path: impl AsRef<Path>) -> Result<(), Error> {
    let mut buffer = Vec::new();
    encode(grid, &mut buffer)?;
    std::fs::write(path, buffer)?;
    Ok(())
}
