use std::fmt;

use super::direction::Direction;
use super::DirectionalBlock;

pub const FREESTANDING_SIGN_ID: u8 = 63;
pub const WALL_SIGN_ID: u8 = 68;

/// Placement mode of a sign. The mode decides the block id, the legal
/// `data` range and the turn granularity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SignMode {
    /// Standing on a post, data 0..=15, turns in quarter rotations over the
    /// full 16-point rose.
    Freestanding,
    /// Hanging on a wall, data in {2, 3, 4, 5}, cardinal directions only.
    WallMounted,
}

impl SignMode {
    pub fn id(self) -> u8 {
        match self {
            SignMode::Freestanding => FREESTANDING_SIGN_ID,
            SignMode::WallMounted => WALL_SIGN_ID,
        }
    }

    pub fn from_id(id: u8) -> eyre::Result<Self> {
        match id {
            FREESTANDING_SIGN_ID => Ok(SignMode::Freestanding),
            WALL_SIGN_ID => Ok(SignMode::WallMounted),
            _ => eyre::bail!("invalid sign id: {id}"),
        }
    }

    /// Decodes a world-format data byte into the direction it encodes under
    /// this mode. Exact inverse of [`SignMode::encode`] over the legal set.
    pub fn decode(self, data: u8) -> eyre::Result<Direction> {
        match self {
            SignMode::WallMounted => match data {
                2 => Ok(Direction::N),
                3 => Ok(Direction::S),
                4 => Ok(Direction::W),
                5 => Ok(Direction::E),
                _ => eyre::bail!("illegal directional state: {data}"),
            },
            SignMode::Freestanding => {
                eyre::ensure!(data <= 15, "illegal directional state: {data}");

                // data 0 is south and +4 is a quarter turn clockwise, so the
                // byte is the compass rank shifted half a rose
                Ok(Direction::from_compass_index((data + 8) % 16).unwrap())
            }
        }
    }

    /// Encodes a direction as a world-format data byte. Wall mode rejects
    /// everything outside the cardinal subset instead of clamping.
    pub fn encode(self, direction: Direction) -> eyre::Result<u8> {
        match self {
            SignMode::WallMounted => match direction {
                Direction::N => Ok(2),
                Direction::S => Ok(3),
                Direction::W => Ok(4),
                Direction::E => Ok(5),
                _ => eyre::bail!("illegal direction for wall sign: {direction}"),
            },
            SignMode::Freestanding => Ok((direction.compass_index() + 8) % 16),
        }
    }
}

/// A sign block: an orientation plus exactly 4 lines of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sign {
    mode: SignMode,
    data: u8,
    direction: Direction,
    text: [String; 4],
}

fn pack_text(lines: &[&str]) -> eyre::Result<[String; 4]> {
    eyre::ensure!(
        lines.len() <= 4,
        "signs can only have up to 4 lines of text, got {}",
        lines.len()
    );

    let mut text: [String; 4] = Default::default();
    for (slot, line) in text.iter_mut().zip(lines) {
        *slot = (*line).to_owned();
    }

    Ok(text)
}

impl Sign {
    /// Builds a sign from a world-format data byte. `text` may hold up to 4
    /// lines; missing lines become empty strings.
    pub fn new(text: &[&str], mode: SignMode, data: u8) -> eyre::Result<Self> {
        let direction = mode.decode(data)?;

        Ok(Self {
            mode,
            data,
            direction,
            text: pack_text(text)?,
        })
    }

    /// Builds a sign facing `direction`, which must be legal for `mode`.
    pub fn with_direction(
        text: &[&str],
        mode: SignMode,
        direction: Direction,
    ) -> eyre::Result<Self> {
        let data = mode.encode(direction)?;

        Ok(Self {
            mode,
            data,
            direction,
            text: pack_text(text)?,
        })
    }

    /// Builds a sign from a raw block id (63 or 68) and data byte, the pair
    /// the schematic loader hands over.
    pub fn from_id(text: &[&str], id: u8, data: u8) -> eyre::Result<Self> {
        Self::new(text, SignMode::from_id(id)?, data)
    }

    pub fn mode(&self) -> SignMode {
        self.mode
    }

    pub fn is_wall_sign(&self) -> bool {
        self.mode == SignMode::WallMounted
    }

    /// Switches between wall-mounted and freestanding, changing the block
    /// id. The data byte is deliberately NOT re-encoded into the new mode's
    /// legal range; the caller must follow up with `set_direction` or
    /// `set_data`, or the next `turn`/decode will fault.
    pub fn set_wall_sign(&mut self, wall: bool) {
        self.mode = if wall {
            SignMode::WallMounted
        } else {
            SignMode::Freestanding
        };
    }

    pub fn text(&self) -> &[String; 4] {
        &self.text
    }

    pub fn set_text(&mut self, text: [String; 4]) {
        self.text = text;
    }

    /// Replaces the text from a slice of exactly 4 lines. Anything else is
    /// rejected and the previous text is kept.
    pub fn set_text_lines(&mut self, lines: &[&str]) -> eyre::Result<()> {
        eyre::ensure!(
            lines.len() == 4,
            "text must be exactly 4 lines, got {}",
            lines.len()
        );

        self.text = pack_text(lines)?;

        Ok(())
    }
}

impl DirectionalBlock for Sign {
    fn id(&self) -> u8 {
        self.mode.id()
    }

    fn data(&self) -> u8 {
        self.data
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn set_data(&mut self, data: u8) -> eyre::Result<()> {
        let direction = self.mode.decode(data)?;
        self.data = data;
        self.direction = direction;

        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) -> eyre::Result<()> {
        self.data = self.mode.encode(direction)?;
        self.direction = direction;

        Ok(())
    }

    fn turn(&mut self, clockwise: bool) {
        match self.mode {
            SignMode::WallMounted => {
                self.data = match (self.direction, clockwise) {
                    (Direction::N, true) => 5,
                    (Direction::N, false) => 4,
                    (Direction::E, true) => 3,
                    (Direction::E, false) => 2,
                    (Direction::S, true) => 4,
                    (Direction::S, false) => 5,
                    (Direction::W, true) => 2,
                    (Direction::W, false) => 3,
                    _ => unreachable!("wall sign facing {}", self.direction),
                };
            }
            SignMode::Freestanding => {
                // a byte outside 0..=15 can only be left behind by an
                // unrepaired mode switch
                assert!(self.data <= 15, "illegal directional state: {}", self.data);

                self.data = if clockwise {
                    (self.data + 4) % 16
                } else {
                    (self.data + 12) % 16
                };
            }
        }

        self.direction = self.mode.decode(self.data).unwrap();
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sign (id {}), {}, facing {}, text: {:?}",
            self.mode.id(),
            if self.is_wall_sign() {
                "on wall"
            } else {
                "freestanding"
            },
            self.direction,
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn unittest_wall_codec_round_trip() -> eyre::Result<()> {
        for data in [2u8, 3, 4, 5] {
            let direction = SignMode::WallMounted.decode(data)?;
            assert_eq!(SignMode::WallMounted.encode(direction)?, data);
        }

        assert_eq!(SignMode::WallMounted.decode(2)?, Direction::N);
        assert_eq!(SignMode::WallMounted.decode(3)?, Direction::S);
        assert_eq!(SignMode::WallMounted.decode(4)?, Direction::W);
        assert_eq!(SignMode::WallMounted.decode(5)?, Direction::E);

        for data in [0u8, 1, 6, 7, 15, 200] {
            assert!(SignMode::WallMounted.decode(data).is_err());
        }

        Ok(())
    }

    #[test]
    fn unittest_freestanding_codec_round_trip() -> eyre::Result<()> {
        for data in 0u8..16 {
            let direction = SignMode::Freestanding.decode(data)?;
            assert_eq!(SignMode::Freestanding.encode(direction)?, data);
        }

        for direction in Direction::iter() {
            let data = SignMode::Freestanding.encode(direction)?;
            assert_eq!(SignMode::Freestanding.decode(data)?, direction);
        }

        // spot checks against the world format tables
        assert_eq!(SignMode::Freestanding.decode(0)?, Direction::S);
        assert_eq!(SignMode::Freestanding.decode(4)?, Direction::W);
        assert_eq!(SignMode::Freestanding.decode(8)?, Direction::N);
        assert_eq!(SignMode::Freestanding.decode(12)?, Direction::E);
        assert_eq!(SignMode::Freestanding.decode(9)?, Direction::NNE);

        assert!(SignMode::Freestanding.decode(16).is_err());
        assert!(SignMode::Freestanding.decode(255).is_err());

        Ok(())
    }

    #[test]
    fn unittest_wall_turn_closure() -> eyre::Result<()> {
        for start in [Direction::N, Direction::E, Direction::S, Direction::W] {
            for clockwise in [true, false] {
                let mut sign = Sign::with_direction(&[], SignMode::WallMounted, start)?;
                let data = sign.data();

                for _ in 0..4 {
                    sign.turn(clockwise);
                }

                assert_eq!(sign.direction(), start);
                assert_eq!(sign.data(), data);
            }
        }

        let mut sign = Sign::with_direction(&[], SignMode::WallMounted, Direction::N)?;
        let mut seen = vec![sign.direction()];
        for _ in 0..3 {
            sign.turn(true);
            seen.push(sign.direction());
        }
        assert_eq!(
            seen,
            vec![Direction::N, Direction::E, Direction::S, Direction::W]
        );

        Ok(())
    }

    #[test]
    fn unittest_freestanding_turn_closure() -> eyre::Result<()> {
        for data in 0u8..16 {
            let mut sign = Sign::new(&[], SignMode::Freestanding, data)?;
            let start = sign.direction();

            for _ in 0..4 {
                sign.turn(true);
            }
            assert_eq!(sign.data(), data);
            assert_eq!(sign.direction(), start);

            sign.turn(true);
            sign.turn(false);
            assert_eq!(sign.data(), data);
            assert_eq!(sign.direction(), start);
        }

        Ok(())
    }

    #[test]
    fn unittest_freestanding_turn_is_a_quarter_rotation() -> eyre::Result<()> {
        let mut sign = Sign::with_direction(&[], SignMode::Freestanding, Direction::N)?;

        sign.turn(true);
        assert_eq!(sign.direction(), Direction::E);

        sign.turn(false);
        sign.turn(false);
        assert_eq!(sign.direction(), Direction::W);

        // 16 direction points, but each turn moves 4 of them
        let mut sign = Sign::with_direction(&[], SignMode::Freestanding, Direction::NNE)?;
        sign.turn(true);
        assert_eq!(sign.direction(), Direction::ESE);

        Ok(())
    }

    #[test]
    fn unittest_wall_sign_rejects_intercardinal_directions() -> eyre::Result<()> {
        let mut sign = Sign::new(&[], SignMode::WallMounted, 3)?;

        assert!(sign.set_direction(Direction::NE).is_err());
        assert_eq!(sign.data(), 3);
        assert_eq!(sign.direction(), Direction::S);

        sign.set_direction(Direction::N)?;
        assert_eq!(sign.data(), 2);

        Ok(())
    }

    #[test]
    fn unittest_set_data_validates_before_storing() -> eyre::Result<()> {
        let mut sign = Sign::new(&[], SignMode::WallMounted, 4)?;

        assert!(sign.set_data(7).is_err());
        assert_eq!(sign.data(), 4);
        assert_eq!(sign.direction(), Direction::W);

        sign.set_data(5)?;
        assert_eq!(sign.direction(), Direction::E);

        Ok(())
    }

    #[test]
    fn unittest_text_is_padded_to_four_lines() -> eyre::Result<()> {
        let sign = Sign::new(&["Hi"], SignMode::Freestanding, 0)?;
        assert_eq!(sign.text(), &["Hi", "", "", ""]);

        let sign = Sign::new(&[], SignMode::Freestanding, 0)?;
        assert_eq!(sign.text(), &["", "", "", ""]);

        assert!(Sign::new(&["a", "b", "c", "d", "e"], SignMode::Freestanding, 0).is_err());

        Ok(())
    }

    #[test]
    fn unittest_set_text_lines_requires_exactly_four() -> eyre::Result<()> {
        let mut sign = Sign::new(&["keep", "me"], SignMode::Freestanding, 0)?;

        assert!(sign.set_text_lines(&["a", "b", "c"]).is_err());
        assert!(sign.set_text_lines(&["a", "b", "c", "d", "e"]).is_err());
        assert_eq!(sign.text(), &["keep", "me", "", ""]);

        sign.set_text_lines(&["1", "2", "3", "4"])?;
        assert_eq!(sign.text(), &["1", "2", "3", "4"]);

        Ok(())
    }

    #[test]
    fn unittest_sign_ids() -> eyre::Result<()> {
        assert_eq!(
            Sign::from_id(&[], 63, 0)?.mode(),
            SignMode::Freestanding
        );
        assert_eq!(Sign::from_id(&[], 68, 2)?.mode(), SignMode::WallMounted);
        assert!(Sign::from_id(&[], 64, 0).is_err());

        assert_eq!(Sign::new(&[], SignMode::WallMounted, 2)?.id(), 68);
        assert_eq!(Sign::new(&[], SignMode::Freestanding, 0)?.id(), 63);

        Ok(())
    }

    #[test]
    fn unittest_equality_across_constructors() -> eyre::Result<()> {
        let by_data = Sign::new(&["a", "b"], SignMode::Freestanding, 8)?;
        let by_direction =
            Sign::with_direction(&["a", "b"], SignMode::Freestanding, Direction::N)?;
        assert_eq!(by_data, by_direction);

        let lines = ["a", "b", "", ""];
        for i in 0..4 {
            let mut changed = lines;
            changed[i] = "x";
            let other = Sign::new(&changed, SignMode::Freestanding, 8)?;
            assert_ne!(by_data, other);
        }

        let wall = Sign::with_direction(&["a", "b"], SignMode::WallMounted, Direction::N)?;
        assert_ne!(by_data, wall);

        Ok(())
    }

    #[test]
    fn unittest_mode_switch_leaves_data_unrepaired() -> eyre::Result<()> {
        let mut sign = Sign::with_direction(&[], SignMode::Freestanding, Direction::NNE)?;
        assert_eq!(sign.data(), 9);

        sign.set_wall_sign(true);

        // now self-inconsistent: id changed, but 9 is not a wall data value
        assert!(sign.is_wall_sign());
        assert_eq!(sign.id(), 68);
        assert_eq!(sign.data(), 9);

        // repairing with set_direction restores the invariant
        sign.set_direction(Direction::E)?;
        assert_eq!(sign.data(), 5);

        Ok(())
    }

    #[test]
    #[should_panic(expected = "wall sign facing")]
    fn unittest_turn_after_unrepaired_mode_switch_faults() {
        let mut sign =
            Sign::with_direction(&[], SignMode::Freestanding, Direction::NNE).unwrap();

        sign.set_wall_sign(true);
        sign.turn(true);
    }

    #[test]
    fn unittest_display() -> eyre::Result<()> {
        let sign = Sign::new(&["Hello"], SignMode::WallMounted, 2)?;
        let rendered = sign.to_string();

        assert!(rendered.contains("on wall"));
        assert!(rendered.contains("facing N"));
        assert!(rendered.contains("Hello"));

        Ok(())
    }

    #[test]
    fn unittest_every_direction_constructible_when_freestanding() {
        let signs = Direction::iter()
            .map(|dir| Sign::with_direction(&[], SignMode::Freestanding, dir).unwrap())
            .collect_vec();

        assert_eq!(signs.len(), 16);
        assert!(signs.iter().map(|sign| sign.data()).all_unique());
    }
}
