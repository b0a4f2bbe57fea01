use polysolve::{factor, gcd, lcm, prime_factorization, Factors};

fn main() {
    println!("gcd(54, 24) = {}", gcd(54, 24));
    println!("lcm(4, 6)   = {}", lcm(4, 6));

    match prime_factorization(360) {
        Ok(primes) => println!("360 = {primes:?}"),
        Err(err) => println!("prime factorization failed: {err}"),
    }

    for n in [12, 97, 0] {
        match factor(n) {
            Factors::Finite(divisors) => println!("divisors of {n}: {divisors:?}"),
            Factors::Infinite => println!("divisors of {n}: infinitely many"),
        }
    }
}
