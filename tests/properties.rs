use ls8::alu::Flags;
use ls8::core::{SP, STACK_TOP};
use ls8::inst::{ADD, CALL, CMP, HLT, LDI, MUL, POP, PUSH, RET};
use ls8::Core;
use proptest::prelude::*;

fn run(program: &[u8]) -> Core {
    let mut core = Core::new();
    core.load(program).unwrap();
    core.run(&mut std::io::sink()).unwrap();
    core
}

proptest! {
    #[test]
    fn add_wraps_mod_256(x: u8, y: u8) {
        let core = run(&[LDI, 0, x, LDI, 1, y, ADD, 0, 1, HLT]);
        prop_assert_eq!(core.reg[0], ((x as u16 + y as u16) % 256) as u8);
        prop_assert_eq!(core.reg[1], y);
    }

    #[test]
    fn mul_wraps_mod_256(x: u8, y: u8) {
        let core = run(&[LDI, 0, x, LDI, 1, y, MUL, 0, 1, HLT]);
        prop_assert_eq!(core.reg[0], ((x as u16 * y as u16) % 256) as u8);
    }

    #[test]
    fn cmp_sets_exactly_one_flag(x: u8, y: u8, z: u8) {
        // A first compare against z leaves flags that the second must clear.
        let core = run(&[LDI, 0, x, LDI, 1, y, LDI, 2, z, CMP, 0, 2, CMP, 0, 1, HLT]);
        let Flags { equal, less, greater } = core.flags;
        prop_assert_eq!([equal, less, greater].iter().filter(|&&f| f).count(), 1);
        prop_assert_eq!(equal, x == y);
        prop_assert_eq!(less, x < y);
        prop_assert_eq!(greater, x > y);
        prop_assert_eq!((core.reg[0], core.reg[1]), (x, y));
    }

    #[test]
    fn push_then_pop_restores(x: u8, r in 0u8..7) {
        let core = run(&[LDI, r, x, PUSH, r, LDI, r, 0, POP, r, HLT]);
        prop_assert_eq!(core.reg[r as usize], x);
        prop_assert_eq!(core.reg[SP], STACK_TOP);
    }

    #[test]
    fn call_then_ret_resumes_after_call(target in 16u8..0xF0) {
        let mut image = vec![0u8; target as usize + 1];
        image[..6].copy_from_slice(&[LDI, 1, target, CALL, 1, HLT]);
        image[target as usize] = RET;
        let core = run(&image);
        // HLT sits at 5, right after the 2-byte CALL at 3.
        prop_assert_eq!(core.pc, 6);
        prop_assert_eq!(core.reg[SP], STACK_TOP);
        prop_assert_eq!(core.cycle_count, 4);
    }
}

#[test]
fn fresh_core_is_initialized() {
    let core = Core::new();
    assert!(core.mem.mem.iter().all(|&b| b == 0));
    assert_eq!(&core.reg[..SP], &[0; 7]);
    assert_eq!(core.reg[SP], 0xF4);
    assert_eq!(core.pc, 0);
    assert_eq!(core.flags, Flags::default());
}
