mod cpu;
mod memory;

use std::process;

use cpu::Cpu;

fn main() {
    env_logger::init();

    // No flags are defined yet; anything passed is ignored.
    let _args: Vec<String> = std::env::args().skip(1).collect();

    // LDA #$C0, TAX, INX, BRK
    let program = [0xA9, 0xC0, 0xAA, 0xE8, 0x00];

    let mut cpu = Cpu::new();
    match cpu.run(&program) {
        Ok(halt) => {
            println!("halted: {:?}", halt);
            println!(
                "A={:02X} X={:02X} Y={:02X} PC={:04X} status={:?} cycles={}",
                cpu.a,
                cpu.x,
                cpu.y,
                cpu.pc,
                cpu.status,
                cpu.cycles()
            );
        }
        Err(err) => {
            eprintln!("run failed: {}", err);
            process::exit(1);
        }
    }
}
