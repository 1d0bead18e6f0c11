// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::{Error, NeighborLink};

/// Follow neighbor links from `leftmost` until every strip is placed.
///
/// Fails if the walk comes back to a strip before all of them are visited.
pub fn assemble(leftmost: usize, links: &[NeighborLink]) -> Result<Vec<usize>, Error> {
    let total = links.len();
    let mut visited = vec![false; total];
    let mut order = Vec::with_capacity(total);

    let mut n = leftmost;
    if n >= total {
        return Err(Error::InvalidLink {
            from: leftmost,
            to: n,
        });
    }

    loop {
        if visited[n] {
            return Err(Error::Cycle {
                index: n,
                visited: order.len(),
                total,
            });
        }
        visited[n] = true;
        order.push(n);

        if order.len() == total {
            return Ok(order);
        }

        let next = links[n].index;
        if next >= total {
            return Err(Error::InvalidLink { from: n, to: next });
        }
        n = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(to: &[usize]) -> Vec<NeighborLink> {
        to.iter()
            .map(|&index| NeighborLink {
                index,
                distance: 0.0,
            })
            .collect()
    }

    #[test]
    fn follows_chain() {
        assert_eq!(assemble(2, &links(&[3, 0, 1, 2])), Ok(vec![2, 1, 0, 3]));
    }

    #[test]
    fn ignores_link_out_of_last_strip() {
        assert_eq!(assemble(0, &links(&[1, 2, 1])), Ok(vec![0, 1, 2]));
        assert_eq!(assemble(0, &links(&[1, 2, 0])), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn short_cycle_is_error() {
        assert_eq!(
            assemble(0, &links(&[1, 0, 3, 2])),
            Err(Error::Cycle {
                index: 0,
                visited: 2,
                total: 4,
            }),
        );
    }

    #[test]
    fn bad_link_is_error() {
        assert_eq!(
            assemble(0, &links(&[5, 0])),
            Err(Error::InvalidLink { from: 0, to: 5 }),
        );
        assert!(assemble(7, &links(&[1, 0])).is_err());
    }
}
